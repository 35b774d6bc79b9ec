//! This module provides the core token types produced by the lexer and
//! consumed by the parser.

mod graphql_token;
mod graphql_token_kind;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use graphql_token_kind::dedent_block_string;
pub use graphql_token_kind::unescape_string;
