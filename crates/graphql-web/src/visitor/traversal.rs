use crate::ast::*;
use crate::visitor::Ancestor;
use crate::visitor::PathKey;
use crate::visitor::Visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use std::sync::Arc;

/// Walks `root` depth-first, calling `visitor`'s hooks on every node, and
/// returns the (possibly edited) root.
///
/// Children are visited in field order: for example a field's `alias`,
/// then `name`, `arguments`, `directives` and `selection_set`. A
/// [`VisitAction::Break`] stops the walk and returns the original `root`.
pub fn visit<V: Visit + ?Sized>(root: impl Into<Node>, visitor: &mut V) -> Result<Node, VisitError> {
    let root = root.into();
    log::trace!("visiting {} tree", root.kind());

    let mut traversal = Traversal {
        visitor,
        path: Vec::new(),
        ancestors: Vec::new(),
    };
    match traversal.traverse(root.clone(), None, None) {
        Ok(Some(result)) => Ok(result),
        Ok(None) => Err(VisitError::RemovedRoot),
        Err(Interrupt::Break) => {
            log::debug!(
                "visit of {} tree stopped early at path {:?}",
                root.kind(),
                traversal.path,
            );
            Ok(root)
        },
        Err(Interrupt::Error(err)) => Err(err),
    }
}

/// Why a traversal stopped before reaching the end.
pub(super) enum Interrupt {
    Break,
    Error(VisitError),
}

impl From<VisitError> for Interrupt {
    fn from(err: VisitError) -> Self {
        Interrupt::Error(err)
    }
}

/// A slot in a node that can hold a child: a node type behind an `Arc`, or
/// one of the sum types over them.
trait Child: Clone + Into<Node> + TryFrom<Node, Error = Node> {
    /// What the slot accepts, for error messages.
    const EXPECTED: &'static str;
}

macro_rules! arc_children {
    ($($node:ident),* $(,)?) => {
        $(
            impl Child for Arc<$node> {
                const EXPECTED: &'static str = stringify!($node);
            }
        )*
    };
}

arc_children!(
    Name,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Argument,
    FragmentDefinition,
    StringValue,
    ObjectField,
    Directive,
    NamedType,
);

impl Child for Definition {
    const EXPECTED: &'static str = "OperationDefinition or FragmentDefinition";
}

impl Child for Selection {
    const EXPECTED: &'static str = "Field, FragmentSpread or InlineFragment";
}

impl Child for Value {
    const EXPECTED: &'static str = "value";
}

impl Child for Type {
    const EXPECTED: &'static str = "NamedType, ListType or NonNullType";
}

impl Child for NullableType {
    const EXPECTED: &'static str = "NamedType or ListType";
}

struct Traversal<'v, V: Visit + ?Sized> {
    visitor: &'v mut V,
    path: Vec<PathKey>,
    ancestors: Vec<Ancestor>,
}

impl<V: Visit + ?Sized> Traversal<'_, V> {
    /// Visits `node` and its subtree. `Ok(None)` means the node was
    /// removed.
    fn traverse(
        &mut self,
        node: Node,
        key: Option<PathKey>,
        parent: Option<&Ancestor>,
    ) -> Result<Option<Node>, Interrupt> {
        let ctx = VisitContext {
            key,
            parent,
            path: &self.path,
            ancestors: &self.ancestors,
        };
        let node = match self.visitor.enter(&node, &ctx)? {
            VisitAction::Continue => node,
            VisitAction::Skip => return Ok(Some(node)),
            VisitAction::Remove => return Ok(None),
            VisitAction::Replace(replacement) => replacement,
            VisitAction::Break => return Err(Interrupt::Break),
        };

        if let Some(parent) = parent {
            self.ancestors.push(parent.clone());
        }
        let node = self.traverse_children(&node)?;
        if parent.is_some() {
            self.ancestors.pop();
        }

        let ctx = VisitContext {
            key,
            parent,
            path: &self.path,
            ancestors: &self.ancestors,
        };
        match self.visitor.leave(&node, &ctx)? {
            VisitAction::Continue | VisitAction::Skip => Ok(Some(node)),
            VisitAction::Remove => Ok(None),
            VisitAction::Replace(replacement) => Ok(Some(replacement)),
            VisitAction::Break => Err(Interrupt::Break),
        }
    }

    /// Visits the children of `node`. Returns `node` itself unless some
    /// child changed, in which case a copy holding the new children.
    fn traverse_children(&mut self, node: &Node) -> Result<Node, Interrupt> {
        let mut edited = false;
        let rebuilt = match node {
            Node::Document(doc) => {
                let definitions = self.list(node, "definitions", &doc.definitions, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(Document {
                    definitions,
                    loc: doc.loc.clone(),
                })
            },
            Node::OperationDefinition(op) => {
                let description =
                    self.optional(node, "description", op.description.as_ref(), &mut edited)?;
                let name = self.optional(node, "name", op.name.as_ref(), &mut edited)?;
                let variable_definitions = self.list(
                    node,
                    "variable_definitions",
                    &op.variable_definitions,
                    &mut edited,
                )?;
                let directives = self.list(node, "directives", &op.directives, &mut edited)?;
                let selection_set =
                    self.required(node, "selection_set", &op.selection_set, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(OperationDefinition {
                    description,
                    operation: op.operation,
                    name,
                    variable_definitions,
                    directives,
                    selection_set,
                    loc: op.loc.clone(),
                })
            },
            Node::FragmentDefinition(frag) => {
                let description =
                    self.optional(node, "description", frag.description.as_ref(), &mut edited)?;
                let name = self.required(node, "name", &frag.name, &mut edited)?;
                let type_condition =
                    self.required(node, "type_condition", &frag.type_condition, &mut edited)?;
                let directives = self.list(node, "directives", &frag.directives, &mut edited)?;
                let selection_set =
                    self.required(node, "selection_set", &frag.selection_set, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(FragmentDefinition {
                    description,
                    name,
                    type_condition,
                    directives,
                    selection_set,
                    loc: frag.loc.clone(),
                })
            },
            Node::VariableDefinition(def) => {
                let description =
                    self.optional(node, "description", def.description.as_ref(), &mut edited)?;
                let variable = self.required(node, "variable", &def.variable, &mut edited)?;
                let ty = self.required(node, "type", &def.ty, &mut edited)?;
                let default_value =
                    self.optional(node, "default_value", def.default_value.as_ref(), &mut edited)?;
                let directives = self.list(node, "directives", &def.directives, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(VariableDefinition {
                    description,
                    variable,
                    ty,
                    default_value,
                    directives,
                    loc: def.loc.clone(),
                })
            },
            Node::Variable(var) => {
                let name = self.required(node, "name", &var.name, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(Variable {
                    name,
                    loc: var.loc.clone(),
                })
            },
            Node::SelectionSet(set) => {
                let selections = self.list(node, "selections", &set.selections, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(SelectionSet {
                    selections,
                    loc: set.loc.clone(),
                })
            },
            Node::Field(field) => {
                let alias = self.optional(node, "alias", field.alias.as_ref(), &mut edited)?;
                let name = self.required(node, "name", &field.name, &mut edited)?;
                let arguments = self.list(node, "arguments", &field.arguments, &mut edited)?;
                let directives = self.list(node, "directives", &field.directives, &mut edited)?;
                let selection_set = self.optional(
                    node,
                    "selection_set",
                    field.selection_set.as_ref(),
                    &mut edited,
                )?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(Field {
                    alias,
                    name,
                    arguments,
                    directives,
                    selection_set,
                    loc: field.loc.clone(),
                })
            },
            Node::Argument(arg) => {
                let name = self.required(node, "name", &arg.name, &mut edited)?;
                let value = self.required(node, "value", &arg.value, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(Argument {
                    name,
                    value,
                    loc: arg.loc.clone(),
                })
            },
            Node::FragmentSpread(spread) => {
                let name = self.required(node, "name", &spread.name, &mut edited)?;
                let directives = self.list(node, "directives", &spread.directives, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(FragmentSpread {
                    name,
                    directives,
                    loc: spread.loc.clone(),
                })
            },
            Node::InlineFragment(frag) => {
                let type_condition = self.optional(
                    node,
                    "type_condition",
                    frag.type_condition.as_ref(),
                    &mut edited,
                )?;
                let directives = self.list(node, "directives", &frag.directives, &mut edited)?;
                let selection_set =
                    self.required(node, "selection_set", &frag.selection_set, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(InlineFragment {
                    type_condition,
                    directives,
                    selection_set,
                    loc: frag.loc.clone(),
                })
            },
            Node::ListValue(list) => {
                let values = self.list(node, "values", &list.values, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(ListValue {
                    values,
                    loc: list.loc.clone(),
                })
            },
            Node::ObjectValue(obj) => {
                let fields = self.list(node, "fields", &obj.fields, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(ObjectValue {
                    fields,
                    loc: obj.loc.clone(),
                })
            },
            Node::ObjectField(field) => {
                let name = self.required(node, "name", &field.name, &mut edited)?;
                let value = self.required(node, "value", &field.value, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(ObjectField {
                    name,
                    value,
                    loc: field.loc.clone(),
                })
            },
            Node::Directive(dir) => {
                let name = self.required(node, "name", &dir.name, &mut edited)?;
                let arguments = self.list(node, "arguments", &dir.arguments, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(Directive {
                    name,
                    arguments,
                    loc: dir.loc.clone(),
                })
            },
            Node::NamedType(named) => {
                let name = self.required(node, "name", &named.name, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(NamedType {
                    name,
                    loc: named.loc.clone(),
                })
            },
            Node::ListType(list) => {
                let ty = self.required(node, "type", &list.ty, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(ListType {
                    ty,
                    loc: list.loc.clone(),
                })
            },
            Node::NonNullType(non_null) => {
                let ty = self.required(node, "type", &non_null.ty, &mut edited)?;
                if !edited {
                    return Ok(node.clone());
                }
                Node::from(NonNullType {
                    ty,
                    loc: non_null.loc.clone(),
                })
            },
            Node::Name(_)
            | Node::IntValue(_)
            | Node::FloatValue(_)
            | Node::StringValue(_)
            | Node::BooleanValue(_)
            | Node::NullValue(_)
            | Node::EnumValue(_) => return Ok(node.clone()),
        };

        Ok(rebuilt)
    }

    /// Visits one child held in a field of `parent`. `Ok(None)` means it was
    /// removed.
    fn child<C: Child>(
        &mut self,
        parent: &Node,
        field: &'static str,
        child: &C,
        edited: &mut bool,
    ) -> Result<Option<C>, Interrupt> {
        let key = PathKey::Field(field);
        let container = Ancestor::Node(parent.clone());
        let original: Node = child.clone().into();

        self.path.push(key);
        let result = self.traverse(original.clone(), Some(key), Some(&container))?;
        self.path.pop();

        Self::settle(child, &original, result, key, edited)
    }

    fn required<C: Child>(
        &mut self,
        parent: &Node,
        field: &'static str,
        child: &C,
        edited: &mut bool,
    ) -> Result<C, Interrupt> {
        self.child(parent, field, child, edited)?.ok_or_else(|| {
            Interrupt::Error(VisitError::RemovedRequiredNode {
                kind: parent.kind(),
                key: PathKey::Field(field),
            })
        })
    }

    fn optional<C: Child>(
        &mut self,
        parent: &Node,
        field: &'static str,
        child: Option<&C>,
        edited: &mut bool,
    ) -> Result<Option<C>, Interrupt> {
        match child {
            Some(child) => self.child(parent, field, child, edited),
            None => Ok(None),
        }
    }

    /// Visits every item of a list field, dropping removed items.
    fn list<C: Child>(
        &mut self,
        parent: &Node,
        field: &'static str,
        items: &[C],
        edited: &mut bool,
    ) -> Result<Vec<C>, Interrupt> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let nodes: Arc<[Node]> = items.iter().cloned().map(Into::into).collect();
        let container = Ancestor::List(Arc::clone(&nodes));
        self.path.push(PathKey::Field(field));
        self.ancestors.push(Ancestor::Node(parent.clone()));

        let mut kept = Vec::with_capacity(items.len());
        for (index, (item, original)) in items.iter().zip(nodes.iter()).enumerate() {
            let key = PathKey::Index(index);
            self.path.push(key);
            let result = self.traverse(original.clone(), Some(key), Some(&container))?;
            self.path.pop();

            if let Some(item) = Self::settle(item, original, result, key, edited)? {
                kept.push(item);
            }
        }

        self.ancestors.pop();
        self.path.pop();
        Ok(kept)
    }

    /// Turns the outcome of visiting `child` back into the slot's type.
    /// The original value is reused when the node came back unchanged.
    fn settle<C: Child>(
        child: &C,
        original: &Node,
        result: Option<Node>,
        key: PathKey,
        edited: &mut bool,
    ) -> Result<Option<C>, Interrupt> {
        let Some(result) = result else {
            *edited = true;
            return Ok(None);
        };
        if result.ptr_eq(original) {
            return Ok(Some(child.clone()));
        }

        *edited = true;
        C::try_from(result).map(Some).map_err(|found| {
            Interrupt::Error(VisitError::InvalidReplacement {
                key,
                expected: C::EXPECTED,
                found: found.kind(),
            })
        })
    }
}
