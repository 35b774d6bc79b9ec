use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::Selection;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;

/// `{ selection ... }`. Never empty when produced by the parser.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn kind(&self) -> Kind {
        Kind::SelectionSet
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().selection_set(self)
    }
}
