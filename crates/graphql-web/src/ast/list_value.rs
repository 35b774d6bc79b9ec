use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Value;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;

/// `[value, ...]`. May be empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ListValue {
    pub values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for ListValue {
    pub fn kind(&self) -> Kind {
        Kind::ListValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().list_value(self)
    }
}
