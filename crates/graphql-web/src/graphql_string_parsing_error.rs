/// Why the contents of a quoted string literal could not be decoded.
///
/// Returned by [`GraphQLTokenKind::parse_string_value()`](crate::token::GraphQLTokenKind::parse_string_value);
/// the parser wraps it in [`GraphQLParseErrorKind::InvalidString`](crate::GraphQLParseErrorKind::InvalidString).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// A backslash followed by a character with no escape meaning, e.g. `\q`.
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The literal has no closing `"`.
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// `\u` not followed by four hex digits, or naming a surrogate that
    /// has no partner.
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
