use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// One entry of an operation's variable list:
/// `["description"] $name: Type [= default] [@dirs]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct VariableDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Arc<StringValue>>,
    pub variable: Arc<Variable>,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Always a constant value (no variables inside).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn kind(&self) -> Kind {
        Kind::VariableDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().variable_definition(self)
    }
}

/// `$name`, either in a variable definition or used as a value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Variable {
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for Variable {
    pub fn kind(&self) -> Kind {
        Kind::Variable
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().variable(self)
    }
}
