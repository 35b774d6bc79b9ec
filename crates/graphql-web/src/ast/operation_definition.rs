use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::VariableDefinition;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

/// The three executable operation types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Maps an operation keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query, mutation or subscription.
///
/// The shorthand form (`{ ... }`) parses to an anonymous `Query` with no
/// variables, directives or description.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct OperationDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Arc<StringValue>>,
    pub operation: OperationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Arc<Name>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable_definitions: Vec<Arc<VariableDefinition>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn kind(&self) -> Kind {
        Kind::OperationDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().operation_definition(self)
    }
}
