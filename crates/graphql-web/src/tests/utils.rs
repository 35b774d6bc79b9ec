//! Helpers shared by the parser, printer and visitor tests.

use crate::ast;
use crate::GraphQLParseError;
use crate::ParseOptions;
use std::sync::Arc;

/// Parses `source` without locations, panicking on syntax errors.
pub fn parse_doc(source: &str) -> ast::Document {
    match crate::parse_document(source, ParseOptions::without_locations()) {
        Ok(doc) => doc,
        Err(err) => panic!("Expected `{source}` to parse, got: {}", err.format_detailed()),
    }
}

/// Parses `source` as a document that must fail, returning the error.
pub fn parse_doc_err(source: &str) -> GraphQLParseError {
    match crate::parse_document(source, ParseOptions::default()) {
        Ok(doc) => panic!("Expected `{source}` to fail, got: {doc:?}"),
        Err(err) => err,
    }
}

/// Parses a value without locations, panicking on syntax errors.
pub fn parse_val(source: &str) -> ast::Value {
    match crate::parse_value(source, ParseOptions::without_locations()) {
        Ok(value) => value,
        Err(err) => panic!("Expected `{source}` to parse, got: {}", err.format_detailed()),
    }
}

/// Parses a type reference without locations, panicking on syntax errors.
pub fn parse_ty(source: &str) -> ast::Type {
    match crate::parse_type(source, ParseOptions::without_locations()) {
        Ok(ty) => ty,
        Err(err) => panic!("Expected `{source}` to parse, got: {}", err.format_detailed()),
    }
}

/// Returns the first definition, which must be an operation.
pub fn first_operation(doc: &ast::Document) -> &Arc<ast::OperationDefinition> {
    match doc.definitions.first() {
        Some(ast::Definition::Operation(op)) => op,
        other => panic!("Expected OperationDefinition, got: {other:?}"),
    }
}

/// Returns the first definition, which must be a fragment.
pub fn first_fragment(doc: &ast::Document) -> &Arc<ast::FragmentDefinition> {
    match doc.definitions.first() {
        Some(ast::Definition::Fragment(frag)) => frag,
        other => panic!("Expected FragmentDefinition, got: {other:?}"),
    }
}

/// Returns the first selection of `set`, which must be a field.
pub fn first_field(set: &ast::SelectionSet) -> &Arc<ast::Field> {
    match set.selections.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("Expected Field, got: {other:?}"),
    }
}

/// Returns the value of a field's first argument.
pub fn first_arg_value(field: &ast::Field) -> &ast::Value {
    match field.arguments.first() {
        Some(arg) => &arg.value,
        None => panic!("Expected `{}` to have arguments", field.name.value),
    }
}

/// Parses `{ f(a: <value>) }` and returns the argument value.
pub fn arg_value(value_source: &str) -> ast::Value {
    let doc = parse_doc(&format!("{{ f(a: {value_source}) }}"));
    let op = first_operation(&doc);
    first_arg_value(first_field(&op.selection_set)).clone()
}
