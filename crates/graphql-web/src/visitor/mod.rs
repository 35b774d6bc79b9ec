//! Generic traversal and copy-on-write editing of syntax trees.
//!
//! [`visit`] walks a tree depth-first, calling [`Visit::enter`] before a
//! node's children and [`Visit::leave`] after them. Each hook returns a
//! [`VisitAction`] that can skip a subtree, remove or replace the current
//! node, or stop the traversal altogether.
//!
//! Edits never mutate the input. Only the nodes on the path from the root
//! to an edit are rebuilt; every untouched subtree in the result is the
//! same `Arc` as in the input, so edits can be detected with
//! [`Node::ptr_eq`](crate::ast::Node::ptr_eq).
//!
//! For quick one-off traversals, [`Visitor`] is a table of closures keyed
//! by [`Kind`](crate::ast::Kind).
//!
//! [`reduce`] walks a tree in the same order but folds it into a value
//! instead of editing it: [`Reduce::leave`] receives the values already
//! reduced from each child field.
//!
//! ```
//! use graphql_web::ast::{Kind, Node};
//! use graphql_web::visitor::{visit, VisitAction, Visitor};
//! use graphql_web::{parse_document, print, ParseOptions};
//!
//! let doc = parse_document("{ a b c }", ParseOptions::default()).unwrap();
//! let mut visitor = Visitor::new().enter_kind(Kind::Field, |node, _| {
//!     Ok(match node {
//!         Node::Field(field) if field.name.value == "b" => VisitAction::Remove,
//!         _ => VisitAction::Continue,
//!     })
//! });
//! let edited = visit(doc, &mut visitor).unwrap();
//! assert_eq!(print(&edited), "{\n  a\n  c\n}");
//! ```

mod closure_visitor;
mod reduce;
mod traversal;
mod visit;
mod visit_context;
mod visit_error;

pub use closure_visitor::VisitFn;
pub use closure_visitor::Visitor;
pub use reduce::reduce;
pub use reduce::Reduce;
pub use reduce::ReduceAction;
pub use reduce::Reduced;
pub use reduce::ReducedField;
pub use traversal::visit;
pub use visit::Visit;
pub use visit::VisitAction;
pub use visit::VisitResult;
pub use visit_context::Ancestor;
pub use visit_context::PathKey;
pub use visit_context::VisitContext;
pub use visit_error::VisitError;
