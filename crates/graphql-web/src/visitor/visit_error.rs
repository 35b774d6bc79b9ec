use crate::ast::Kind;
use crate::visitor::PathKey;

/// Errors that abort a traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// A hook failed with its own error.
    #[error(transparent)]
    Callback(Box<dyn std::error::Error + Send + Sync>),

    /// A hook replaced a node with one that cannot sit in its position,
    /// e.g. a `Directive` in a `selections` list.
    #[error("cannot put a {found} node at `{key}`: expected {expected}")]
    InvalidReplacement {
        key: PathKey,
        expected: &'static str,
        found: Kind,
    },

    /// A hook removed a child its parent cannot do without.
    #[error("cannot remove required field `{key}` of a {kind} node")]
    RemovedRequiredNode { kind: Kind, key: PathKey },

    /// A hook removed the root node.
    #[error("the root node cannot be removed")]
    RemovedRoot,
}

impl VisitError {
    /// Wraps an arbitrary error returned by a hook.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        VisitError::Callback(err.into())
    }
}
