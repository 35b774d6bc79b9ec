use crate::ast::AstNode;
use crate::ast::Kind;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;

/// A GraphQL name (identifier), matching `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Names are used for operation, fragment, field, argument, directive,
/// variable, type and enum value names.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Name {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }
}

#[inherent]
impl AstNode for Name {
    pub fn kind(&self) -> Kind {
        Kind::Name
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().name(self)
    }
}
