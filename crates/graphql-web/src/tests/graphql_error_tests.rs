//! Tests for `GraphQLError`: derived positions and locations, extension
//! fallback and response serialization.

use crate::ast::Node;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::GraphQLError;
use crate::ParseOptions;
use crate::PathSegment;
use crate::Source;
use crate::SourceLocation;
use serde_json::json;
use serde_json::Map;
use std::error::Error;
use std::sync::Arc;

fn extensions(value: serde_json::Value) -> Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("Expected a JSON object, got: {other:?}"),
    }
}

// =============================================================================
// Positions and locations
// =============================================================================

/// A bare error has nothing but its message.
#[test]
fn bare_error() {
    let err = GraphQLError::new("boom");
    assert_eq!(err.message(), "boom");
    assert_eq!(err.to_string(), "boom");
    assert!(err.nodes().is_empty());
    assert!(err.graphql_source().is_none());
    assert!(err.positions().is_empty());
    assert!(err.locations().is_empty());
    assert!(err.path().is_empty());
    assert!(err.extensions().is_empty());
    assert!(err.source().is_none());
}

/// Nodes supply the source, positions and locations when none are given.
#[test]
fn locations_from_nodes() {
    let doc = crate::parse_document("{\n  a\n  b\n}", ParseOptions::default()).unwrap();
    let op = first_operation(&doc);
    let b = match &op.selection_set.selections[1] {
        crate::ast::Selection::Field(field) => Arc::clone(field),
        other => panic!("Expected Field, got: {other:?}"),
    };
    let a = Arc::clone(first_field(&op.selection_set));

    let err = GraphQLError::new("bad fields").with_nodes([Node::from(a), Node::from(b)]);
    assert_eq!(err.positions(), [4, 8]);
    assert_eq!(
        err.locations(),
        [SourceLocation { line: 2, column: 3 }, SourceLocation { line: 3, column: 3 }],
    );
    let source = err.graphql_source().unwrap();
    assert_eq!(source.body, "{\n  a\n  b\n}");
}

/// Nodes without locations contribute nothing.
#[test]
fn unlocated_nodes() {
    let err = GraphQLError::new("x").with_node(crate::ast::Name::new("n"));
    assert_eq!(err.nodes().len(), 1);
    assert!(err.positions().is_empty());
    assert!(err.locations().is_empty());
}

/// Explicit positions are resolved against the explicit source, with its
/// location offset applied.
#[test]
fn explicit_positions() {
    let source = Source::new("query {\r\n  a\n}").with_location_offset(5, 10);
    let err = GraphQLError::new("x")
        .with_source(source)
        .with_positions([0, 11, 100]);
    assert_eq!(
        err.locations(),
        [
            SourceLocation { line: 5, column: 10 },
            SourceLocation { line: 6, column: 3 },
            SourceLocation { line: 7, column: 2 },
        ],
    );
}

/// Positions without any source cannot be located.
#[test]
fn positions_without_source() {
    let err = GraphQLError::new("x").with_positions([3]);
    assert_eq!(err.positions(), [3]);
    assert!(err.locations().is_empty());
}

// =============================================================================
// Syntax errors
// =============================================================================

/// A parse error converts into a located `Syntax Error`.
#[test]
fn from_parse_error() {
    let parse_err = crate::parse_document("{ f(a 1) }", ParseOptions::default()).unwrap_err();
    let err = GraphQLError::from(parse_err);
    assert_eq!(err.message(), "Syntax Error: expected `:`, found `1`");
    assert_eq!(err.positions(), [6]);
    assert_eq!(err.locations(), [SourceLocation { line: 1, column: 7 }]);

    let cause = err.original_error().unwrap();
    assert!(cause.downcast_ref::<crate::GraphQLParseError>().is_some());
    assert!(err.source().is_some());
}

// =============================================================================
// Extensions
// =============================================================================

/// Explicit extensions win.
#[test]
fn explicit_extensions() {
    let err = GraphQLError::new("x").with_extensions(extensions(json!({"code": "BAD"})));
    assert_eq!(err.extensions()["code"], "BAD");
}

/// Without explicit extensions, those of a wrapped `GraphQLError` are
/// used.
#[test]
fn extensions_from_original_error() {
    let inner = GraphQLError::new("inner").with_extensions(extensions(json!({"code": "INNER"})));
    let outer = GraphQLError::new("outer").with_original_error(inner);
    assert_eq!(outer.extensions()["code"], "INNER");
    assert_eq!(outer.source().map(|e| e.to_string()), Some("inner".to_string()));

    let other = GraphQLError::new("outer").with_original_error("plain cause");
    assert!(other.extensions().is_empty());
    assert_eq!(other.original_error().map(|e| e.to_string()), Some("plain cause".to_string()));
}

// =============================================================================
// Serialization
// =============================================================================

/// Serializes to the response error shape, leaving out empty parts.
#[test]
fn serialize_response_shape() {
    let err = GraphQLError::new("Cannot query field")
        .with_source(Source::new("{ a }"))
        .with_positions([2])
        .with_path([
            PathSegment::from("user"),
            PathSegment::from(0),
            PathSegment::from("name"),
        ])
        .with_extensions(extensions(json!({"code": "X"})));

    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({
            "message": "Cannot query field",
            "locations": [{"line": 1, "column": 3}],
            "path": ["user", 0, "name"],
            "extensions": {"code": "X"},
        }),
    );

    assert_eq!(
        serde_json::to_value(GraphQLError::new("m")).unwrap(),
        json!({"message": "m"}),
    );
}
