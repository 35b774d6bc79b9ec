use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Name;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// A type reference: `Name`, `[Type]` or `Type!`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Type {
    Named(Arc<NamedType>),
    List(Arc<ListType>),
    NonNull(Arc<NonNullType>),
}

impl Type {
    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_named_type(&self) -> &Arc<NamedType> {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.ty.innermost_named_type(),
            Type::NonNull(non_null) => match &non_null.ty {
                NullableType::Named(named) => named,
                NullableType::List(list) => list.ty.innermost_named_type(),
            },
        }
    }
}

#[inherent]
impl AstNode for Type {
    pub fn kind(&self) -> Kind {
        match self {
            Type::Named(_) => Kind::NamedType,
            Type::List(_) => Kind::ListType,
            Type::NonNull(_) => Kind::NonNullType,
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Type::Named(named) => named.loc.as_ref(),
            Type::List(list) => list.loc.as_ref(),
            Type::NonNull(non_null) => non_null.loc.as_ref(),
        }
    }

    pub fn print(&self) -> String {
        Printer::default().ty(self)
    }
}

/// The types a [`NonNullType`] may wrap. A non-null type can never wrap
/// another non-null type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum NullableType {
    Named(Arc<NamedType>),
    List(Arc<ListType>),
}

impl From<NullableType> for Type {
    fn from(ty: NullableType) -> Self {
        match ty {
            NullableType::Named(named) => Type::Named(named),
            NullableType::List(list) => Type::List(list),
        }
    }
}

/// A reference to a named type, e.g. `String` or a type condition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct NamedType {
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for NamedType {
    pub fn kind(&self) -> Kind {
        Kind::NamedType
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        self.name.value.clone()
    }
}

/// `[Type]`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ListType {
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for ListType {
    pub fn kind(&self) -> Kind {
        Kind::ListType
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().list_type(self)
    }
}

/// `Type!`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct NonNullType {
    #[serde(rename = "type")]
    pub ty: NullableType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for NonNullType {
    pub fn kind(&self) -> Kind {
        Kind::NonNullType
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().non_null_type(self)
    }
}
