use crate::GraphQLStringParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` of [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `[":"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// query { user {
    ///               ^ expected `}`, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer could not form a token here. Its message and notes are
    /// carried by the parent error.
    ///
    /// # Example
    /// ```text
    /// query { field(arg: 12e) }
    ///                    ^^^ exponent must have at least one digit
    /// ```
    #[error("lexer error")]
    LexerError,

    /// A string literal's escape sequences could not be decoded.
    #[error("invalid string: {0}")]
    InvalidString(GraphQLStringParsingError),

    /// A construct that must have content was empty.
    ///
    /// - Selection sets: `{ }`
    /// - Argument and variable-definition lists: `()`
    /// - Documents with no definitions
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        /// What construct is empty (e.g. `"selection set"`).
        construct: String,
    },

    /// Values, selection sets or list types nested beyond the parser's
    /// recursion limit.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,

    /// A catch-all for syntax errors without dedicated variants. The
    /// specific error is described by the parent error's message.
    #[error("invalid syntax")]
    InvalidSyntax,
}
