use crate::ast::Node;
use std::fmt;
use std::sync::Arc;

/// One step in the path from the root to a node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PathKey {
    /// A node field, by its snake_case name (`"selection_set"`, `"type"`).
    Field(&'static str),
    /// A position in a list field.
    Index(usize),
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Field(name) => f.write_str(name),
            PathKey::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A container above the current node: either a node, or one of its list
/// fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Ancestor {
    Node(Node),
    List(Arc<[Node]>),
}

/// Where a hook is being called from.
///
/// For the root, `key` and `parent` are `None` and `path` and `ancestors`
/// are empty. Below the root, `path` holds every key from the root down to
/// and including `key`, `parent` is the immediate container, and
/// `ancestors` holds the containers above `parent`, so
/// `ancestors.len() == path.len() - 1`.
#[derive(Clone, Copy, Debug)]
pub struct VisitContext<'a> {
    pub key: Option<PathKey>,
    pub parent: Option<&'a Ancestor>,
    pub path: &'a [PathKey],
    pub ancestors: &'a [Ancestor],
}
