//! A small, fast parser, printer and visitor for GraphQL executable
//! documents: operations, fragments and the value and type literals inside
//! them.
//!
//! - [`parse_document`], [`parse_value`], [`parse_const_value`] and
//!   [`parse_type`] turn text into an [`ast`] tree. Parsing stops at the
//!   first syntax error, reported as a [`GraphQLParseError`].
//! - [`print`] renders any node back to canonical GraphQL text.
//! - [`visitor::visit`] walks a tree and produces edited copies that share
//!   every untouched subtree with the input; [`visitor::reduce`] folds a
//!   tree into a single value.
//! - [`value_from_ast_untyped`] and [`value_from_type_node`] convert value
//!   literals to JSON.
//!
//! Type system definitions (`type`, `schema`, ...) are not supported.
//!
//! ```
//! use graphql_web::{parse_document, print, ParseOptions};
//! use graphql_web::ast::Node;
//!
//! let doc = parse_document("query Q($id: ID!) { node(id: $id) { id } }", ParseOptions::default())
//!     .unwrap();
//! assert_eq!(
//!     print(&Node::from(doc)),
//!     "query Q($id: ID!) {\n  node(id: $id) {\n    id\n  }\n}",
//! );
//! ```

pub mod ast;
mod grammar_production;
mod graphql_error;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod location;
mod parse;
mod parse_options;
mod printer;
mod source;
mod source_position;
pub mod token;
pub mod token_source;
mod values;
pub mod visitor;

pub use grammar_production::GrammarProduction;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use graphql_error::SourceLocation;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use location::Location;
pub use parse::parse_const_value;
pub use parse::parse_document;
pub use parse::parse_type;
pub use parse::parse_value;
pub use parse_options::ParseOptions;
pub use printer::MAX_LINE_LENGTH;
pub use printer::print;
pub use printer::print_block_string_literal;
pub use printer::print_string_literal;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source::DEFAULT_SOURCE_NAME;
pub use source::LocationOffset;
pub use source::Source;
pub use source_position::SourcePosition;
pub use values::value_from_ast_untyped;
pub use values::value_from_type_node;

#[cfg(test)]
mod tests;
