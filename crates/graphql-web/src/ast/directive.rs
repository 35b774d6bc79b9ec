use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Name;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// `@name(args)` applied to an operation, fragment, field, spread or
/// variable definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Directive {
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Arc<Argument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for Directive {
    pub fn kind(&self) -> Kind {
        Kind::Directive
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().directive(self)
    }
}
