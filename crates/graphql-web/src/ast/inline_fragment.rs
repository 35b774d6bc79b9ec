use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// `... [on Type] @dirs { ... }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct InlineFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_condition: Option<Arc<NamedType>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn kind(&self) -> Kind {
        Kind::InlineFragment
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().inline_fragment(self)
    }
}
