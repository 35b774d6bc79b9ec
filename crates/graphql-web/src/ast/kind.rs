use std::fmt;

/// The tag carried by every syntax tree node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum Kind {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Name => "Name",
            Kind::Document => "Document",
            Kind::OperationDefinition => "OperationDefinition",
            Kind::VariableDefinition => "VariableDefinition",
            Kind::Variable => "Variable",
            Kind::SelectionSet => "SelectionSet",
            Kind::Field => "Field",
            Kind::Argument => "Argument",
            Kind::FragmentSpread => "FragmentSpread",
            Kind::InlineFragment => "InlineFragment",
            Kind::FragmentDefinition => "FragmentDefinition",
            Kind::IntValue => "IntValue",
            Kind::FloatValue => "FloatValue",
            Kind::StringValue => "StringValue",
            Kind::BooleanValue => "BooleanValue",
            Kind::NullValue => "NullValue",
            Kind::EnumValue => "EnumValue",
            Kind::ListValue => "ListValue",
            Kind::ObjectValue => "ObjectValue",
            Kind::ObjectField => "ObjectField",
            Kind::Directive => "Directive",
            Kind::NamedType => "NamedType",
            Kind::ListType => "ListType",
            Kind::NonNullType => "NonNullType",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
