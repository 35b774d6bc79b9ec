use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::Value;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// `{name: value, ...}`. May be empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ObjectValue {
    pub fields: Vec<Arc<ObjectField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn kind(&self) -> Kind {
        Kind::ObjectValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().object_value(self)
    }
}

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ObjectField {
    pub name: Arc<Name>,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn kind(&self) -> Kind {
        Kind::ObjectField
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().object_field(self)
    }
}
