//! Syntax tree types for parsed GraphQL executable documents.
//!
//! Every node type is a plain struct whose child links are [`Arc`]s, so a
//! subtree can be shared between trees and cloned in O(1). Nodes are
//! immutable once built; the [`visitor`](crate::visitor) produces edited
//! copies that keep untouched subtrees pointer-identical.
//!
//! Optional lists (arguments, directives, variable definitions) are plain
//! `Vec`s; an empty `Vec` means the list was absent in the source. Every
//! node carries `loc: Option<Location>`, which is `None` when parsed with
//! [`ParseOptions::no_location`](crate::ParseOptions::no_location).
//!
//! [`Node`] wraps any one of the 24 node types for code that handles them
//! uniformly (the printer and the visitor).
//!
//! # Example
//!
//! ```rust
//! use graphql_web::ast::{Definition, Selection};
//! use graphql_web::{parse_document, ParseOptions};
//!
//! let doc = parse_document("{ user { id } }", ParseOptions::default()).unwrap();
//! let Definition::Operation(op) = &doc.definitions[0] else { unreachable!() };
//! let Selection::Field(user) = &op.selection_set.selections[0] else { unreachable!() };
//! assert_eq!(user.name.value, "user");
//! ```
//!
//! [`Arc`]: std::sync::Arc

mod argument;
mod ast_node;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod kind;
mod list_value;
mod name;
mod node;
mod object_value;
mod operation_definition;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use kind::Kind;
pub use list_value::ListValue;
pub use name::Name;
pub use node::Node;
pub use object_value::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::NullableType;
pub use type_annotation::Type;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::NullValue;
pub use value::StringValue;
pub use value::Value;
pub use variable_definition::Variable;
pub use variable_definition::VariableDefinition;
