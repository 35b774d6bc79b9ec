use crate::ast::Kind;
use crate::ast::Node;
use crate::visitor::Visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitResult;
use std::collections::HashMap;

/// A boxed visitor hook.
pub type VisitFn<'a> = Box<dyn FnMut(&Node, &VisitContext<'_>) -> VisitResult + 'a>;

#[derive(Default)]
struct KindHooks<'a> {
    enter: Option<VisitFn<'a>>,
    leave: Option<VisitFn<'a>>,
}

/// A [`Visit`] implementation assembled from closures.
///
/// Hooks can be registered for all nodes ([`Visitor::enter`],
/// [`Visitor::leave`]) or for one [`Kind`] ([`Visitor::enter_kind`],
/// [`Visitor::leave_kind`]). Once any hook is registered for a kind, nodes
/// of that kind only run their own hooks; the global ones apply to every
/// other kind.
///
/// ```
/// use graphql_web::ast::{Kind, Node};
/// use graphql_web::visitor::{visit, VisitAction, Visitor};
/// use graphql_web::{parse_document, ParseOptions};
///
/// let doc = parse_document("{ a { b } }", ParseOptions::default()).unwrap();
/// let mut names = Vec::new();
/// let mut visitor = Visitor::new().enter_kind(Kind::Name, |node, _| {
///     if let Node::Name(name) = node {
///         names.push(name.value.clone());
///     }
///     Ok(VisitAction::Continue)
/// });
/// visit(doc, &mut visitor).unwrap();
/// drop(visitor);
/// assert_eq!(names, ["a", "b"]);
/// ```
#[derive(Default)]
pub struct Visitor<'a> {
    enter: Option<VisitFn<'a>>,
    leave: Option<VisitFn<'a>>,
    kinds: HashMap<Kind, KindHooks<'a>>,
}

impl<'a> Visitor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook called when entering nodes of kinds without their own
    /// hooks.
    pub fn enter(
        mut self,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> VisitResult + 'a,
    ) -> Self {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Sets the hook called when leaving nodes of kinds without their own
    /// hooks.
    pub fn leave(
        mut self,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> VisitResult + 'a,
    ) -> Self {
        self.leave = Some(Box::new(hook));
        self
    }

    pub fn enter_kind(
        mut self,
        kind: Kind,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> VisitResult + 'a,
    ) -> Self {
        self.kinds.entry(kind).or_default().enter = Some(Box::new(hook));
        self
    }

    pub fn leave_kind(
        mut self,
        kind: Kind,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> VisitResult + 'a,
    ) -> Self {
        self.kinds.entry(kind).or_default().leave = Some(Box::new(hook));
        self
    }
}

impl Visit for Visitor<'_> {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> VisitResult {
        let hook = match self.kinds.get_mut(&node.kind()) {
            Some(hooks) => hooks.enter.as_mut(),
            None => self.enter.as_mut(),
        };
        match hook {
            Some(hook) => hook(node, ctx),
            None => Ok(VisitAction::Continue),
        }
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> VisitResult {
        let hook = match self.kinds.get_mut(&node.kind()) {
            Some(hooks) => hooks.leave.as_mut(),
            None => self.leave.as_mut(),
        };
        match hook {
            Some(hook) => hook(node, ctx),
            None => Ok(VisitAction::Continue),
        }
    }
}
