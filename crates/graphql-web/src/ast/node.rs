use crate::ast::*;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

/// Any syntax tree node, tagged by [`Kind`].
///
/// This is the currency of the printer and the visitor: it lets code handle
/// every node type uniformly while the typed structs keep their exact
/// shapes. Cloning a `Node` only bumps a reference count.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Node {
    Name(Arc<Name>),
    Document(Arc<Document>),
    OperationDefinition(Arc<OperationDefinition>),
    VariableDefinition(Arc<VariableDefinition>),
    Variable(Arc<Variable>),
    SelectionSet(Arc<SelectionSet>),
    Field(Arc<Field>),
    Argument(Arc<Argument>),
    FragmentSpread(Arc<FragmentSpread>),
    InlineFragment(Arc<InlineFragment>),
    FragmentDefinition(Arc<FragmentDefinition>),
    IntValue(Arc<IntValue>),
    FloatValue(Arc<FloatValue>),
    StringValue(Arc<StringValue>),
    BooleanValue(Arc<BooleanValue>),
    NullValue(Arc<NullValue>),
    EnumValue(Arc<EnumValue>),
    ListValue(Arc<ListValue>),
    ObjectValue(Arc<ObjectValue>),
    ObjectField(Arc<ObjectField>),
    Directive(Arc<Directive>),
    NamedType(Arc<NamedType>),
    ListType(Arc<ListType>),
    NonNullType(Arc<NonNullType>),
}

/// Expands `$body` once with `$inner` bound to the `Arc` held by whichever
/// variant `$node` is.
macro_rules! with_inner {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            Node::Name($inner) => $body,
            Node::Document($inner) => $body,
            Node::OperationDefinition($inner) => $body,
            Node::VariableDefinition($inner) => $body,
            Node::Variable($inner) => $body,
            Node::SelectionSet($inner) => $body,
            Node::Field($inner) => $body,
            Node::Argument($inner) => $body,
            Node::FragmentSpread($inner) => $body,
            Node::InlineFragment($inner) => $body,
            Node::FragmentDefinition($inner) => $body,
            Node::IntValue($inner) => $body,
            Node::FloatValue($inner) => $body,
            Node::StringValue($inner) => $body,
            Node::BooleanValue($inner) => $body,
            Node::NullValue($inner) => $body,
            Node::EnumValue($inner) => $body,
            Node::ListValue($inner) => $body,
            Node::ObjectValue($inner) => $body,
            Node::ObjectField($inner) => $body,
            Node::Directive($inner) => $body,
            Node::NamedType($inner) => $body,
            Node::ListType($inner) => $body,
            Node::NonNullType($inner) => $body,
        }
    };
}

impl Node {
    /// Whether `self` and `other` are the very same node (same allocation),
    /// not merely equal.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Name(a), Node::Name(b)) => Arc::ptr_eq(a, b),
            (Node::Document(a), Node::Document(b)) => Arc::ptr_eq(a, b),
            (Node::OperationDefinition(a), Node::OperationDefinition(b)) => Arc::ptr_eq(a, b),
            (Node::VariableDefinition(a), Node::VariableDefinition(b)) => Arc::ptr_eq(a, b),
            (Node::Variable(a), Node::Variable(b)) => Arc::ptr_eq(a, b),
            (Node::SelectionSet(a), Node::SelectionSet(b)) => Arc::ptr_eq(a, b),
            (Node::Field(a), Node::Field(b)) => Arc::ptr_eq(a, b),
            (Node::Argument(a), Node::Argument(b)) => Arc::ptr_eq(a, b),
            (Node::FragmentSpread(a), Node::FragmentSpread(b)) => Arc::ptr_eq(a, b),
            (Node::InlineFragment(a), Node::InlineFragment(b)) => Arc::ptr_eq(a, b),
            (Node::FragmentDefinition(a), Node::FragmentDefinition(b)) => Arc::ptr_eq(a, b),
            (Node::IntValue(a), Node::IntValue(b)) => Arc::ptr_eq(a, b),
            (Node::FloatValue(a), Node::FloatValue(b)) => Arc::ptr_eq(a, b),
            (Node::StringValue(a), Node::StringValue(b)) => Arc::ptr_eq(a, b),
            (Node::BooleanValue(a), Node::BooleanValue(b)) => Arc::ptr_eq(a, b),
            (Node::NullValue(a), Node::NullValue(b)) => Arc::ptr_eq(a, b),
            (Node::EnumValue(a), Node::EnumValue(b)) => Arc::ptr_eq(a, b),
            (Node::ListValue(a), Node::ListValue(b)) => Arc::ptr_eq(a, b),
            (Node::ObjectValue(a), Node::ObjectValue(b)) => Arc::ptr_eq(a, b),
            (Node::ObjectField(a), Node::ObjectField(b)) => Arc::ptr_eq(a, b),
            (Node::Directive(a), Node::Directive(b)) => Arc::ptr_eq(a, b),
            (Node::NamedType(a), Node::NamedType(b)) => Arc::ptr_eq(a, b),
            (Node::ListType(a), Node::ListType(b)) => Arc::ptr_eq(a, b),
            (Node::NonNullType(a), Node::NonNullType(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns `true` for `Field`, `FragmentSpread` and `InlineFragment`
    /// nodes.
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Node::Field(_) | Node::FragmentSpread(_) | Node::InlineFragment(_)
        )
    }
}

#[inherent]
impl AstNode for Node {
    pub fn kind(&self) -> Kind {
        with_inner!(self, inner => inner.kind())
    }

    pub fn loc(&self) -> Option<&Location> {
        with_inner!(self, inner => inner.loc.as_ref())
    }

    pub fn print(&self) -> String {
        Printer::default().node(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

macro_rules! node_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<Arc<$variant>> for Node {
                fn from(node: Arc<$variant>) -> Self {
                    Node::$variant(node)
                }
            }

            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(Arc::new(node))
                }
            }

            impl TryFrom<Node> for Arc<$variant> {
                type Error = Node;

                fn try_from(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

node_conversions!(
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
);

// =============================================================================
// Sum type conversions
// =============================================================================

impl From<Definition> for Node {
    fn from(def: Definition) -> Self {
        match def {
            Definition::Operation(op) => Node::OperationDefinition(op),
            Definition::Fragment(frag) => Node::FragmentDefinition(frag),
        }
    }
}

impl TryFrom<Node> for Definition {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::OperationDefinition(op) => Ok(Definition::Operation(op)),
            Node::FragmentDefinition(frag) => Ok(Definition::Fragment(frag)),
            other => Err(other),
        }
    }
}

impl From<Selection> for Node {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Field(field) => Node::Field(field),
            Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
            Selection::InlineFragment(frag) => Node::InlineFragment(frag),
        }
    }
}

impl TryFrom<Node> for Selection {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::Field(field) => Ok(Selection::Field(field)),
            Node::FragmentSpread(spread) => Ok(Selection::FragmentSpread(spread)),
            Node::InlineFragment(frag) => Ok(Selection::InlineFragment(frag)),
            other => Err(other),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Variable(v) => Node::Variable(v),
            Value::Int(v) => Node::IntValue(v),
            Value::Float(v) => Node::FloatValue(v),
            Value::String(v) => Node::StringValue(v),
            Value::Boolean(v) => Node::BooleanValue(v),
            Value::Null(v) => Node::NullValue(v),
            Value::Enum(v) => Node::EnumValue(v),
            Value::List(v) => Node::ListValue(v),
            Value::Object(v) => Node::ObjectValue(v),
        }
    }
}

impl TryFrom<Node> for Value {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::Variable(v) => Ok(Value::Variable(v)),
            Node::IntValue(v) => Ok(Value::Int(v)),
            Node::FloatValue(v) => Ok(Value::Float(v)),
            Node::StringValue(v) => Ok(Value::String(v)),
            Node::BooleanValue(v) => Ok(Value::Boolean(v)),
            Node::NullValue(v) => Ok(Value::Null(v)),
            Node::EnumValue(v) => Ok(Value::Enum(v)),
            Node::ListValue(v) => Ok(Value::List(v)),
            Node::ObjectValue(v) => Ok(Value::Object(v)),
            other => Err(other),
        }
    }
}

impl From<Type> for Node {
    fn from(ty: Type) -> Self {
        match ty {
            Type::Named(named) => Node::NamedType(named),
            Type::List(list) => Node::ListType(list),
            Type::NonNull(non_null) => Node::NonNullType(non_null),
        }
    }
}

impl TryFrom<Node> for Type {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::NamedType(named) => Ok(Type::Named(named)),
            Node::ListType(list) => Ok(Type::List(list)),
            Node::NonNullType(non_null) => Ok(Type::NonNull(non_null)),
            other => Err(other),
        }
    }
}

impl From<NullableType> for Node {
    fn from(ty: NullableType) -> Self {
        match ty {
            NullableType::Named(named) => Node::NamedType(named),
            NullableType::List(list) => Node::ListType(list),
        }
    }
}

impl TryFrom<Node> for NullableType {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Node> {
        match node {
            Node::NamedType(named) => Ok(NullableType::Named(named)),
            Node::ListType(list) => Ok(NullableType::List(list)),
            other => Err(other),
        }
    }
}
