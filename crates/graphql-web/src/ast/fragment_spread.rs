use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::Name;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// `...FragmentName @dirs`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FragmentSpread {
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn kind(&self) -> Kind {
        Kind::FragmentSpread
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().fragment_spread(self)
    }
}
