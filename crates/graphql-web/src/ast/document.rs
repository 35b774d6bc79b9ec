use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::Kind;
use crate::ast::OperationDefinition;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// The root of a parsed executable document.
///
/// A parsed document always holds at least one definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Document {
    pub definitions: Vec<Definition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Document {
    /// Iterates the operation definitions, in document order.
    pub fn operations(&self) -> impl Iterator<Item = &Arc<OperationDefinition>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterates the fragment definitions, in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &Arc<FragmentDefinition>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(_) => None,
            Definition::Fragment(frag) => Some(frag),
        })
    }
}

#[inherent]
impl AstNode for Document {
    pub fn kind(&self) -> Kind {
        Kind::Document
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().document(self)
    }
}

/// A top-level definition in an executable document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Definition {
    Operation(Arc<OperationDefinition>),
    Fragment(Arc<FragmentDefinition>),
}

#[inherent]
impl AstNode for Definition {
    pub fn kind(&self) -> Kind {
        match self {
            Definition::Operation(_) => Kind::OperationDefinition,
            Definition::Fragment(_) => Kind::FragmentDefinition,
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Definition::Operation(op) => op.loc.as_ref(),
            Definition::Fragment(frag) => frag.loc.as_ref(),
        }
    }

    pub fn print(&self) -> String {
        match self {
            Definition::Operation(op) => op.print(),
            Definition::Fragment(frag) => frag.print(),
        }
    }
}
