use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// `fragment Name on Type @dirs { ... }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FragmentDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub type_condition: Arc<NamedType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn kind(&self) -> Kind {
        Kind::FragmentDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().fragment_definition(self)
    }
}
