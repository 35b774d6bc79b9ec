use crate::token::GraphQLTokenKind;
use crate::GraphQLSourceSpan;

/// A GraphQL token with location (span) information.
///
/// Ignored tokens (whitespace, commas, comments) never reach the parser;
/// the lexer skips them between significant tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: GraphQLTokenKind<'src>,

    /// The source location span of this token.
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }
}
