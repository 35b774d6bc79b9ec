use crate::ast::Node;
use crate::visitor::traversal::Interrupt;
use crate::visitor::Ancestor;
use crate::visitor::PathKey;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use std::sync::Arc;

/// What a [`Reduce::enter`] hook asks the reduction to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum ReduceAction<R> {
    /// Reduce the node's children, then call [`Reduce::leave`].
    Continue,

    /// Use this value for the node without visiting its children or
    /// calling `leave` for it.
    Skip(R),

    /// Leave the node out of its parent's [`Reduced`] children.
    Remove,

    /// Stop the whole reduction. [`reduce`] then returns `Ok(None)`.
    Break,
}

/// The value reduced from one field of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum ReducedField<R> {
    One(R),
    List(Vec<R>),
}

/// The reduced values of a node's children, keyed by field name
/// (`"name"`, `"selection_set"`, ...) in field order.
///
/// Absent optional fields and removed single children have no entry. List
/// fields always have one, possibly empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Reduced<R> {
    fields: Vec<(&'static str, ReducedField<R>)>,
}

impl<R> Reduced<R> {
    pub fn get(&self, field: &str) -> Option<&R> {
        self.fields.iter().find_map(|(name, value)| match value {
            ReducedField::One(value) if *name == field => Some(value),
            _ => None,
        })
    }

    pub fn get_list(&self, field: &str) -> &[R] {
        self.fields
            .iter()
            .find_map(|(name, value)| match value {
                ReducedField::List(values) if *name == field => Some(values.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Moves the value of a single-child field out.
    pub fn take(&mut self, field: &str) -> Option<R> {
        let index = self.fields.iter().position(|(name, value)| {
            *name == field && matches!(value, ReducedField::One(_))
        })?;
        match self.fields.remove(index).1 {
            ReducedField::One(value) => Some(value),
            ReducedField::List(_) => None,
        }
    }

    /// Moves the values of a list field out, in list order.
    pub fn take_list(&mut self, field: &str) -> Vec<R> {
        let Some(index) = self.fields.iter().position(|(name, value)| {
            *name == field && matches!(value, ReducedField::List(_))
        }) else {
            return Vec::new();
        };
        match self.fields.remove(index).1 {
            ReducedField::List(values) => values,
            ReducedField::One(_) => Vec::new(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &ReducedField<R>)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Every reduced value, flattened in field order.
    pub fn into_values(self) -> impl Iterator<Item = R> {
        self.fields.into_iter().flat_map(|(_, value)| match value {
            ReducedField::One(value) => vec![value],
            ReducedField::List(values) => values,
        })
    }
}

/// Hooks called by [`reduce`], which folds a tree bottom-up into one value.
///
/// `leave` is called once per node with the values its children reduced
/// to, and returns the node's own value.
pub trait Reduce {
    type Output;

    fn enter(
        &mut self,
        _node: &Node,
        _ctx: &VisitContext<'_>,
    ) -> Result<ReduceAction<Self::Output>, VisitError> {
        Ok(ReduceAction::Continue)
    }

    fn leave(
        &mut self,
        node: &Node,
        children: Reduced<Self::Output>,
        ctx: &VisitContext<'_>,
    ) -> Result<Self::Output, VisitError>;
}

/// Reduces `root` depth-first with `reducer`, visiting children in the
/// same order and with the same [`VisitContext`] as
/// [`visit`](crate::visitor::visit).
///
/// Returns `Ok(None)` when a hook breaks, and
/// [`VisitError::RemovedRoot`] when `enter` removes the root.
///
/// ```
/// use graphql_web::ast::Node;
/// use graphql_web::visitor::{reduce, Reduce, Reduced, VisitContext, VisitError};
/// use graphql_web::{parse_document, ParseOptions};
///
/// struct CountFields;
///
/// impl Reduce for CountFields {
///     type Output = usize;
///
///     fn leave(
///         &mut self,
///         node: &Node,
///         children: Reduced<usize>,
///         _ctx: &VisitContext<'_>,
///     ) -> Result<usize, VisitError> {
///         let own = usize::from(matches!(node, Node::Field(_)));
///         Ok(own + children.into_values().sum::<usize>())
///     }
/// }
///
/// let doc = parse_document("{ a { b c } d }", ParseOptions::default()).unwrap();
/// assert_eq!(reduce(doc, &mut CountFields).unwrap(), Some(4));
/// ```
pub fn reduce<R: Reduce + ?Sized>(
    root: impl Into<Node>,
    reducer: &mut R,
) -> Result<Option<R::Output>, VisitError> {
    let root = root.into();
    log::trace!("reducing {} tree", root.kind());

    let mut reduction = Reduction {
        reducer,
        path: Vec::new(),
        ancestors: Vec::new(),
    };
    match reduction.reduce_node(&root, None, None) {
        Ok(Some(value)) => Ok(Some(value)),
        Ok(None) => Err(VisitError::RemovedRoot),
        Err(Interrupt::Break) => {
            log::debug!(
                "reduction of {} tree stopped early at path {:?}",
                root.kind(),
                reduction.path,
            );
            Ok(None)
        },
        Err(Interrupt::Error(err)) => Err(err),
    }
}

/// A field of a node holding children.
enum Slot {
    One(Node),
    List(Arc<[Node]>),
}

/// Collects a node's child fields in field order.
#[derive(Default)]
struct Slots(Vec<(&'static str, Slot)>);

impl Slots {
    fn one(mut self, field: &'static str, child: &(impl Clone + Into<Node>)) -> Self {
        self.0.push((field, Slot::One(child.clone().into())));
        self
    }

    fn optional<C: Clone + Into<Node>>(self, field: &'static str, child: Option<&C>) -> Self {
        match child {
            Some(child) => self.one(field, child),
            None => self,
        }
    }

    fn list<C: Clone + Into<Node>>(mut self, field: &'static str, items: &[C]) -> Self {
        let nodes: Arc<[Node]> = items.iter().cloned().map(Into::into).collect();
        self.0.push((field, Slot::List(nodes)));
        self
    }

    fn of(node: &Node) -> Self {
        let slots = Slots::default();
        match node {
            Node::Document(doc) => slots.list("definitions", &doc.definitions),
            Node::OperationDefinition(op) => slots
                .optional("description", op.description.as_ref())
                .optional("name", op.name.as_ref())
                .list("variable_definitions", &op.variable_definitions)
                .list("directives", &op.directives)
                .one("selection_set", &op.selection_set),
            Node::FragmentDefinition(frag) => slots
                .optional("description", frag.description.as_ref())
                .one("name", &frag.name)
                .one("type_condition", &frag.type_condition)
                .list("directives", &frag.directives)
                .one("selection_set", &frag.selection_set),
            Node::VariableDefinition(def) => slots
                .optional("description", def.description.as_ref())
                .one("variable", &def.variable)
                .one("type", &def.ty)
                .optional("default_value", def.default_value.as_ref())
                .list("directives", &def.directives),
            Node::Variable(var) => slots.one("name", &var.name),
            Node::SelectionSet(set) => slots.list("selections", &set.selections),
            Node::Field(field) => slots
                .optional("alias", field.alias.as_ref())
                .one("name", &field.name)
                .list("arguments", &field.arguments)
                .list("directives", &field.directives)
                .optional("selection_set", field.selection_set.as_ref()),
            Node::Argument(arg) => slots.one("name", &arg.name).one("value", &arg.value),
            Node::FragmentSpread(spread) => {
                slots.one("name", &spread.name).list("directives", &spread.directives)
            },
            Node::InlineFragment(frag) => slots
                .optional("type_condition", frag.type_condition.as_ref())
                .list("directives", &frag.directives)
                .one("selection_set", &frag.selection_set),
            Node::ListValue(list) => slots.list("values", &list.values),
            Node::ObjectValue(obj) => slots.list("fields", &obj.fields),
            Node::ObjectField(field) => slots.one("name", &field.name).one("value", &field.value),
            Node::Directive(dir) => slots.one("name", &dir.name).list("arguments", &dir.arguments),
            Node::NamedType(named) => slots.one("name", &named.name),
            Node::ListType(list) => slots.one("type", &list.ty),
            Node::NonNullType(non_null) => slots.one("type", &non_null.ty),
            Node::Name(_)
            | Node::IntValue(_)
            | Node::FloatValue(_)
            | Node::StringValue(_)
            | Node::BooleanValue(_)
            | Node::NullValue(_)
            | Node::EnumValue(_) => slots,
        }
    }
}

struct Reduction<'r, R: Reduce + ?Sized> {
    reducer: &'r mut R,
    path: Vec<PathKey>,
    ancestors: Vec<Ancestor>,
}

impl<R: Reduce + ?Sized> Reduction<'_, R> {
    /// Reduces `node` and its subtree. `Ok(None)` means the node was
    /// removed.
    fn reduce_node(
        &mut self,
        node: &Node,
        key: Option<PathKey>,
        parent: Option<&Ancestor>,
    ) -> Result<Option<R::Output>, Interrupt> {
        let ctx = VisitContext {
            key,
            parent,
            path: &self.path,
            ancestors: &self.ancestors,
        };
        match self.reducer.enter(node, &ctx)? {
            ReduceAction::Continue => {},
            ReduceAction::Skip(value) => return Ok(Some(value)),
            ReduceAction::Remove => return Ok(None),
            ReduceAction::Break => return Err(Interrupt::Break),
        }

        if let Some(parent) = parent {
            self.ancestors.push(parent.clone());
        }
        let children = self.reduce_children(node)?;
        if parent.is_some() {
            self.ancestors.pop();
        }

        let ctx = VisitContext {
            key,
            parent,
            path: &self.path,
            ancestors: &self.ancestors,
        };
        Ok(Some(self.reducer.leave(node, children, &ctx)?))
    }

    fn reduce_children(&mut self, node: &Node) -> Result<Reduced<R::Output>, Interrupt> {
        let Slots(slots) = Slots::of(node);
        let mut fields = Vec::with_capacity(slots.len());
        for (field, slot) in slots {
            match slot {
                Slot::One(child) => {
                    let key = PathKey::Field(field);
                    let container = Ancestor::Node(node.clone());
                    self.path.push(key);
                    let value = self.reduce_node(&child, Some(key), Some(&container))?;
                    self.path.pop();
                    if let Some(value) = value {
                        fields.push((field, ReducedField::One(value)));
                    }
                },
                Slot::List(items) => {
                    let container = Ancestor::List(Arc::clone(&items));
                    self.path.push(PathKey::Field(field));
                    self.ancestors.push(Ancestor::Node(node.clone()));

                    let mut values = Vec::with_capacity(items.len());
                    for (index, item) in items.iter().enumerate() {
                        let key = PathKey::Index(index);
                        self.path.push(key);
                        let value = self.reduce_node(item, Some(key), Some(&container))?;
                        self.path.pop();
                        values.extend(value);
                    }

                    self.ancestors.pop();
                    self.path.pop();
                    fields.push((field, ReducedField::List(values)));
                },
            }
        }
        Ok(Reduced { fields })
    }
}
