use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::Value;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// `name: value` inside a field's or directive's argument list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Argument {
    pub name: Arc<Name>,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for Argument {
    pub fn kind(&self) -> Kind {
        Kind::Argument
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().argument(self)
    }
}
