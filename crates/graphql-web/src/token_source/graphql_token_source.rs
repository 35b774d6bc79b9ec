use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource) is
/// the lexer over `&str` input; the parser accepts any other iterator of
/// tokens as well (e.g. a pre-lexed buffer in tests).
///
/// Lexers are responsible for:
/// - Skipping ignored tokens (whitespace, line terminators, commas, the BOM
///   and `#` comments)
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for text that does not form a token
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token
///
/// All lookahead and buffering is handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
