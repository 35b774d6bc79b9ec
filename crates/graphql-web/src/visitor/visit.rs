use crate::ast::Node;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;

/// What a [`Visit`] hook asks the traversal to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum VisitAction {
    /// Keep the node and carry on.
    Continue,

    /// From [`Visit::enter`]: keep the node as is, without visiting its
    /// children or calling [`Visit::leave`] for it. Same as `Continue` when
    /// returned from `leave`.
    Skip,

    /// Drop the node from its list, or clear the optional field holding it.
    /// Removing a required child is a [`VisitError::RemovedRequiredNode`].
    Remove,

    /// Put this node in place of the current one. When returned from
    /// `enter`, the replacement's children are visited instead of the
    /// original's.
    Replace(Node),

    /// Stop the whole traversal. [`visit`](crate::visitor::visit) then
    /// returns the unedited root.
    Break,
}

pub type VisitResult = Result<VisitAction, VisitError>;

/// Hooks called by [`visit`](crate::visitor::visit) for every node.
///
/// Both hooks default to [`VisitAction::Continue`]. An `Err` from either
/// hook aborts the traversal and is returned from `visit` unchanged.
pub trait Visit {
    fn enter(&mut self, _node: &Node, _ctx: &VisitContext<'_>) -> VisitResult {
        Ok(VisitAction::Continue)
    }

    /// Receives the node after its children were visited, with any edits
    /// to them already applied.
    fn leave(&mut self, _node: &Node, _ctx: &VisitContext<'_>) -> VisitResult {
        Ok(VisitAction::Continue)
    }
}
