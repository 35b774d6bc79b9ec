use crate::ast::AstNode;
use crate::ast::Kind;
use crate::ast::ListValue;
use crate::ast::ObjectValue;
use crate::ast::Variable;
use crate::printer::Printer;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// A GraphQL input value literal.
///
/// Values parsed in a constant context (variable defaults, directives on
/// variable definitions) never contain [`Value::Variable`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Variable(Arc<Variable>),
    Int(Arc<IntValue>),
    Float(Arc<FloatValue>),
    String(Arc<StringValue>),
    Boolean(Arc<BooleanValue>),
    Null(Arc<NullValue>),
    Enum(Arc<EnumValue>),
    List(Arc<ListValue>),
    Object(Arc<ObjectValue>),
}

impl Value {
    /// Returns `true` if no variable appears anywhere inside this value.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(obj) => obj.fields.iter().all(|field| field.value.is_const()),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null(_)
            | Value::Enum(_) => true,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Variable(_) => Kind::Variable,
            Value::Int(_) => Kind::IntValue,
            Value::Float(_) => Kind::FloatValue,
            Value::String(_) => Kind::StringValue,
            Value::Boolean(_) => Kind::BooleanValue,
            Value::Null(_) => Kind::NullValue,
            Value::Enum(_) => Kind::EnumValue,
            Value::List(_) => Kind::ListValue,
            Value::Object(_) => Kind::ObjectValue,
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Value::Variable(v) => v.loc.as_ref(),
            Value::Int(v) => v.loc.as_ref(),
            Value::Float(v) => v.loc.as_ref(),
            Value::String(v) => v.loc.as_ref(),
            Value::Boolean(v) => v.loc.as_ref(),
            Value::Null(v) => v.loc.as_ref(),
            Value::Enum(v) => v.loc.as_ref(),
            Value::List(v) => v.loc.as_ref(),
            Value::Object(v) => v.loc.as_ref(),
        }
    }

    pub fn print(&self) -> String {
        Printer::default().value(self)
    }
}

/// An integer literal. `value` is the source text (e.g. `"-12"`, `"007"`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct IntValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for IntValue {
    pub fn kind(&self) -> Kind {
        Kind::IntValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        self.value.clone()
    }
}

/// A float literal. `value` is the source text (e.g. `"1.5e3"`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FloatValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn kind(&self) -> Kind {
        Kind::FloatValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        self.value.clone()
    }
}

/// A string literal with its decoded `value`. `block` records whether it
/// was written as a `"""` block string.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl StringValue {
    pub fn new(value: impl Into<String>, block: bool) -> Self {
        Self {
            value: value.into(),
            block,
            loc: None,
        }
    }
}

#[inherent]
impl AstNode for StringValue {
    pub fn kind(&self) -> Kind {
        Kind::StringValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        Printer::default().string_value(self)
    }
}

/// `true` or `false`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct BooleanValue {
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn kind(&self) -> Kind {
        Kind::BooleanValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        self.value.to_string()
    }
}

/// `null`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct NullValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for NullValue {
    pub fn kind(&self) -> Kind {
        Kind::NullValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        "null".to_string()
    }
}

/// An enum value: any name other than `true`, `false` and `null` in value
/// position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct EnumValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn kind(&self) -> Kind {
        Kind::EnumValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }

    pub fn print(&self) -> String {
        self.value.clone()
    }
}
