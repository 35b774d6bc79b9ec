//! Convenience entry points that parse a complete input in one call.
//!
//! Each function accepts anything convertible into a [`Source`] (`&str`,
//! `String` or a `Source` with a custom name or location offset), wraps it in
//! an [`Arc`] shared by every node location, and runs a fresh
//! [`GraphQLParser`].

use crate::ast;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::ParseOptions;
use crate::Source;
use std::sync::Arc;

/// Parses an executable document.
///
/// ```
/// use graphql_web::{parse_document, ParseOptions};
///
/// let doc = parse_document("query Hello { world }", ParseOptions::default()).unwrap();
/// assert_eq!(doc.operations().count(), 1);
/// ```
pub fn parse_document(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Document, GraphQLParseError> {
    let source = Arc::new(source.into());
    GraphQLParser::new(&source, options).parse_document()
}

/// Parses a single value. Variables are allowed; trailing tokens are an
/// error.
pub fn parse_value(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Value, GraphQLParseError> {
    let source = Arc::new(source.into());
    GraphQLParser::new(&source, options).parse_value()
}

/// Parses a single constant value: like [`parse_value`], but a variable
/// anywhere in the value is an error.
pub fn parse_const_value(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Value, GraphQLParseError> {
    let source = Arc::new(source.into());
    GraphQLParser::new(&source, options).parse_const_value()
}

/// Parses a type reference such as `[String!]!`.
///
/// ```
/// use graphql_web::{parse_type, ParseOptions};
/// use graphql_web::ast::Type;
///
/// let ty = parse_type("[Int]!", ParseOptions::default()).unwrap();
/// assert!(matches!(ty, Type::NonNull(_)));
/// assert_eq!(ty.innermost_named_type().name.value, "Int");
/// ```
pub fn parse_type(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Type, GraphQLParseError> {
    let source = Arc::new(source.into());
    GraphQLParser::new(&source, options).parse_type()
}
