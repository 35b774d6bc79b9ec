/// The grammar production the parser was working on when it failed.
///
/// Every [`GraphQLParseError`](crate::GraphQLParseError) names one, so
/// callers can tell "bad selection set" from "bad variable definition"
/// without matching on message text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GrammarProduction {
    Document,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    FragmentSpread,
    InlineFragment,
    Argument,
    ObjectField,
    Directive,
    Name,
    NamedType,
    ListType,
    Value,
    ListValue,
    ObjectValue,
    IntValue,
    FloatValue,
    StringValue,
}

impl GrammarProduction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::OperationDefinition => "OperationDefinition",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::VariableDefinition => "VariableDefinition",
            Self::Variable => "Variable",
            Self::SelectionSet => "SelectionSet",
            Self::Field => "Field",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::Argument => "Argument",
            Self::ObjectField => "ObjectField",
            Self::Directive => "Directive",
            Self::Name => "Name",
            Self::NamedType => "NamedType",
            Self::ListType => "ListType",
            Self::Value => "Value",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::IntValue => "IntValue",
            Self::FloatValue => "FloatValue",
            Self::StringValue => "StringValue",
        }
    }
}

impl std::fmt::Display for GrammarProduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
