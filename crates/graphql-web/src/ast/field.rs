use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// A field selection, optionally aliased, with arguments, directives and a
/// nested selection set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Arc<Name>>,
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Arc<Argument>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<Arc<SelectionSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Field {
    /// The key this field's result is stored under: the alias if present,
    /// otherwise the name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }
}

#[inherent]
impl AstNode for Field {
    pub fn kind(&self) -> Kind {
        Kind::Field
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().field(self)
    }
}
