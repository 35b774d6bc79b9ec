use crate::ast::Kind;
use crate::Location;

/// Trait implemented by all syntax tree node types.
///
/// All node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
pub trait AstNode {
    /// The node's [`Kind`] tag. Sum types (e.g. `Selection`) report the kind
    /// of the variant they hold.
    fn kind(&self) -> Kind;

    /// Where the node was parsed from. `None` for nodes built by hand or
    /// parsed with `no_location`.
    fn loc(&self) -> Option<&Location>;

    /// Renders the node as canonical GraphQL text.
    fn print(&self) -> String;
}
