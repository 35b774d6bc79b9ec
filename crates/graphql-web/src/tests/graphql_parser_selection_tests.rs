//! Tests for selection sets: fields, aliases, arguments, directives,
//! fragment spreads and inline fragments.

use crate::ast;
use crate::ast::Selection;
use crate::tests::utils::first_arg_value;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_doc;
use crate::tests::utils::parse_doc_err;
use crate::GraphQLParseErrorKind;

/// Returns the selections of the first operation.
fn selections(doc: &ast::Document) -> &[Selection] {
    &first_operation(doc).selection_set.selections
}

// =============================================================================
// Fields
// =============================================================================

/// `alias: name(args) @dirs { ... }` in full.
#[test]
fn field_with_everything() {
    let doc = parse_doc("{ me: user(id: 4, active: true) @include(if: $x) { id } }");
    let field = first_field(&first_operation(&doc).selection_set);

    assert_eq!(field.alias.as_ref().map(|a| a.value.as_str()), Some("me"));
    assert_eq!(field.name.value, "user");
    assert_eq!(field.response_key(), "me");

    let arg_names: Vec<&str> = field.arguments.iter().map(|a| a.name.value.as_str()).collect();
    assert_eq!(arg_names, ["id", "active"]);
    assert!(matches!(first_arg_value(field), ast::Value::Int(int) if int.value == "4"));

    assert_eq!(field.directives.len(), 1);
    assert_eq!(field.directives[0].name.value, "include");
    assert!(matches!(
        &field.directives[0].arguments[0].value,
        ast::Value::Variable(var) if var.name.value == "x"
    ));

    let sub = field.selection_set.as_ref().map(|set| set.selections.len());
    assert_eq!(sub, Some(1));
}

/// Without an alias the response key is the field name.
#[test]
fn response_key_without_alias() {
    let doc = parse_doc("{ name }");
    let field = first_field(&first_operation(&doc).selection_set);
    assert!(field.alias.is_none());
    assert_eq!(field.response_key(), "name");
    assert!(field.selection_set.is_none());
}

/// Several directives, with and without arguments.
#[test]
fn multiple_directives() {
    let doc = parse_doc("{ a @one @two(x: 1) @three }");
    let field = first_field(&first_operation(&doc).selection_set);
    let names: Vec<&str> = field.directives.iter().map(|d| d.name.value.as_str()).collect();
    assert_eq!(names, ["one", "two", "three"]);
    assert!(field.directives[0].arguments.is_empty());
    assert_eq!(field.directives[1].arguments.len(), 1);
}

// =============================================================================
// Fragments
// =============================================================================

/// `...Name` is a spread; `... on Type` and bare `...` are inline
/// fragments.
#[test]
fn spreads_and_inline_fragments() {
    let doc = parse_doc(
        "{
            ...UserFields @defer
            ... on User { id }
            ... @include(if: true) { name }
            ...on Admin { level }
        }",
    );
    let sels = selections(&doc);
    assert_eq!(sels.len(), 4);

    if let Selection::FragmentSpread(spread) = &sels[0] {
        assert_eq!(spread.name.value, "UserFields");
        assert_eq!(spread.directives[0].name.value, "defer");
    } else {
        panic!("Expected FragmentSpread, got: {:?}", sels[0]);
    }

    if let Selection::InlineFragment(frag) = &sels[1] {
        assert_eq!(frag.type_condition.as_ref().map(|t| t.name.value.as_str()), Some("User"));
        assert!(frag.directives.is_empty());
    } else {
        panic!("Expected InlineFragment, got: {:?}", sels[1]);
    }

    if let Selection::InlineFragment(frag) = &sels[2] {
        assert!(frag.type_condition.is_none());
        assert_eq!(frag.directives[0].name.value, "include");
    } else {
        panic!("Expected InlineFragment, got: {:?}", sels[2]);
    }

    if let Selection::InlineFragment(frag) = &sels[3] {
        assert_eq!(frag.type_condition.as_ref().map(|t| t.name.value.as_str()), Some("Admin"));
    } else {
        panic!("Expected InlineFragment, got: {:?}", sels[3]);
    }
}

/// A spread may be named anything but `on`, including `true`/`null`.
#[test]
fn spread_named_like_keyword() {
    let doc = parse_doc("{ ...null ...query }");
    let names: Vec<&str> = selections(&doc)
        .iter()
        .map(|selection| match selection {
            Selection::FragmentSpread(spread) => spread.name.value.as_str(),
            other => panic!("Expected FragmentSpread, got: {other:?}"),
        })
        .collect();
    assert_eq!(names, ["null", "query"]);
}

/// An inline fragment requires a selection set.
#[test]
fn inline_fragment_without_selection_set_is_rejected() {
    let err = parse_doc_err("{ ... on User }");
    assert_eq!(err.message(), "expected `{`, found `}`");
}

// =============================================================================
// Empty and unbalanced constructs
// =============================================================================

/// `{}` is not a selection set.
#[test]
fn empty_selection_set_is_rejected() {
    let err = parse_doc_err("{ a {} }");
    assert_eq!(err.message(), "selection set cannot be empty");
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidEmptyConstruct {
            construct: "selection set".to_string(),
        },
    );
    assert_eq!(err.span().byte_range(), 4..6);
}

/// `()` is not an argument list.
#[test]
fn empty_arguments_are_rejected() {
    let err = parse_doc_err("{ a() }");
    assert_eq!(err.message(), "argument list cannot be empty");

    let err = parse_doc_err("{ a @dir() }");
    assert_eq!(err.message(), "argument list cannot be empty");
}

/// A selection set left open runs into the end of input.
#[test]
fn unclosed_selection_set_is_rejected() {
    let err = parse_doc_err("{ a { b }");
    assert_eq!(err.message(), "expected name, found end of input");
    assert_eq!(err.offset(), 9);
}

/// Selection sets nested past the recursion limit are rejected.
#[test]
fn deeply_nested_selection_sets_are_rejected() {
    let source = format!("{}{}", "{ a ".repeat(100), "}".repeat(100));
    let err = parse_doc_err(&source);
    assert_eq!(err.kind(), &GraphQLParseErrorKind::NestingTooDeep);
    assert_eq!(err.message(), "maximum nesting depth exceeded");
}

/// Nesting below the limit is fine.
#[test]
fn nested_selection_sets_within_limit() {
    let source = format!("{}b{}", "{ a ".repeat(40), "}".repeat(40));
    let doc = parse_doc(&source);
    assert_eq!(selections(&doc).len(), 1);
}
