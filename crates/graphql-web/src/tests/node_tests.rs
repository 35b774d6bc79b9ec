//! Tests for the node model: kinds, `Node` conversions, identity and JSON
//! serialization.

use crate::ast;
use crate::ast::Kind;
use crate::ast::Node;
use crate::tests::utils::first_field;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_doc;
use crate::ParseOptions;
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// Kinds
// =============================================================================

/// Sum types report the kind of the node they hold.
#[test]
fn kinds_of_sum_types() {
    let doc = parse_doc("{ a ...F ... on T { b } }");
    let op = first_operation(&doc);
    let kinds: Vec<Kind> = op.selection_set.selections.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, [Kind::Field, Kind::FragmentSpread, Kind::InlineFragment]);
    assert_eq!(doc.definitions[0].kind(), Kind::OperationDefinition);

    assert_eq!(crate::tests::utils::parse_val("[1]").kind(), Kind::ListValue);
    assert_eq!(crate::tests::utils::parse_ty("[A]!").kind(), Kind::NonNullType);
}

/// Kinds display as their type names.
#[test]
fn kind_names() {
    assert_eq!(Kind::OperationDefinition.to_string(), "OperationDefinition");
    assert_eq!(Kind::NonNullType.as_str(), "NonNullType");
    assert_eq!(Kind::Name.to_string(), "Name");
}

// =============================================================================
// Node conversions and identity
// =============================================================================

/// Converting to `Node` and back keeps the same allocation.
#[test]
fn node_round_trip_keeps_identity() {
    let doc = parse_doc("{ a }");
    let field = Arc::clone(first_field(&first_operation(&doc).selection_set));

    let node = Node::from(Arc::clone(&field));
    assert_eq!(node.kind(), Kind::Field);
    assert!(node.is_selection());

    let back: Arc<ast::Field> = node.try_into().unwrap();
    assert!(Arc::ptr_eq(&back, &field));
}

/// `TryFrom` hands back the node when the kind does not match.
#[test]
fn node_try_from_wrong_kind() {
    let node = Node::from(ast::Name::new("x"));
    let result: Result<ast::Value, Node> = node.clone().try_into();
    let Err(returned) = result else {
        panic!("Expected Name to not convert to Value");
    };
    assert!(returned.ptr_eq(&node));
}

/// `ptr_eq` is identity, `==` is structural equality.
#[test]
fn ptr_eq_versus_eq() {
    let a = Node::from(ast::Name::new("x"));
    let b = Node::from(ast::Name::new("x"));
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
    assert!(a.ptr_eq(&a.clone()));
    assert!(!a.ptr_eq(&Node::from(ast::StringValue::new("x", false))));
}

/// Values and types convert through their sum types.
#[test]
fn sum_type_conversions() {
    let value = crate::tests::utils::parse_val("RED");
    let node = Node::from(value.clone());
    assert!(matches!(&node, Node::EnumValue(e) if e.value == "RED"));
    assert_eq!(ast::Value::try_from(node).unwrap(), value);

    let ty = crate::tests::utils::parse_ty("[Int]");
    let node = Node::from(ty);
    assert!(ast::NullableType::try_from(node.clone()).is_ok());
    assert!(ast::Definition::try_from(node).is_err());
}

/// Every node prints on its own, and `Display` is the printed form.
#[test]
fn nodes_print_individually() {
    let doc = parse_doc("query Q($v: [Int!] = [1]) { f(a: {b: \"c\"}) @d(e: $v) }");
    let op = first_operation(&doc);
    assert_eq!(op.variable_definitions[0].print(), "$v: [Int!] = [1]");
    assert_eq!(op.variable_definitions[0].ty.print(), "[Int!]");

    let field = first_field(&op.selection_set);
    assert_eq!(field.print(), "f(a: {b: \"c\"}) @d(e: $v)");
    assert_eq!(field.arguments[0].print(), "a: {b: \"c\"}");
    assert_eq!(field.directives[0].print(), "@d(e: $v)");
    assert_eq!(Node::from(Arc::clone(field)).to_string(), field.print());
}

// =============================================================================
// Serialization
// =============================================================================

/// Nodes serialize with a `kind` tag and camelCase field names; absent
/// optional parts and locations are left out.
#[test]
fn serialize_document() {
    let doc = parse_doc("query Q($a: Int = 1) { f(x: $a) }");
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["kind"], "Document");
    assert!(json.get("loc").is_none());

    let op = &json["definitions"][0];
    assert_eq!(op["kind"], "OperationDefinition");
    assert_eq!(op["operation"], "query");
    assert_eq!(op["name"], json!({"kind": "Name", "value": "Q"}));
    assert!(op.get("description").is_none());

    let var_def = &op["variableDefinitions"][0];
    assert_eq!(var_def["kind"], "VariableDefinition");
    assert_eq!(var_def["type"], json!({"kind": "NamedType", "name": {"kind": "Name", "value": "Int"}}));
    assert_eq!(var_def["defaultValue"], json!({"kind": "IntValue", "value": "1"}));

    let field = &op["selectionSet"]["selections"][0];
    assert_eq!(field["kind"], "Field");
    assert!(field.get("alias").is_none());
    assert_eq!(
        field["arguments"][0]["value"],
        json!({"kind": "Variable", "name": {"kind": "Name", "value": "a"}}),
    );
}

/// Strings serialize their `block` flag.
#[test]
fn serialize_string_value() {
    let value = crate::tests::utils::parse_val("\"\"\"x\"\"\"");
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({"kind": "StringValue", "value": "x", "block": true}),
    );
}

/// Locations serialize as spans; the source itself is not repeated.
#[test]
fn serialize_location() {
    let name = crate::parse_value("abc", ParseOptions::default()).unwrap();
    let json = serde_json::to_value(&name).unwrap();
    let span = &json["loc"]["span"];
    assert_eq!(span["startInclusive"]["byte_offset"], 0);
    assert_eq!(span["endExclusive"]["byte_offset"], 3);
    assert!(json["loc"].get("source").is_none());
}
