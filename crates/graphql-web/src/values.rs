//! Conversion of value literals into JSON values.
//!
//! These helpers turn a parsed [`Value`] into a [`serde_json::Value`],
//! substituting variables from a JSON object. [`value_from_ast_untyped`]
//! converts structurally; [`value_from_type_node`] additionally checks the
//! literal against a type reference and returns `None` when it does not
//! fit.

use crate::ast::NullableType;
use crate::ast::Type;
use crate::ast::Value;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value as JsonValue;

/// Converts `value` to JSON without any type information.
///
/// Returns `None` for a variable missing from `variables` (or when no
/// variables are given) and for a float literal too large to represent.
/// Nested inside a list such a value becomes `null`; inside an object its
/// field is left out.
///
/// ```
/// use graphql_web::{parse_value, value_from_ast_untyped, ParseOptions};
/// use serde_json::json;
///
/// let value = parse_value("{a: [1, 2.5, \"x\", RED, null]}", ParseOptions::default()).unwrap();
/// assert_eq!(
///     value_from_ast_untyped(&value, None),
///     Some(json!({"a": [1, 2.5, "x", "RED", null]})),
/// );
/// ```
pub fn value_from_ast_untyped(
    value: &Value,
    variables: Option<&Map<String, JsonValue>>,
) -> Option<JsonValue> {
    match value {
        Value::Null(_) => Some(JsonValue::Null),
        Value::Int(int) => int_to_json(&int.value),
        Value::Float(float) => float_to_json(&float.value),
        Value::String(string) => Some(JsonValue::String(string.value.clone())),
        Value::Enum(enum_value) => Some(JsonValue::String(enum_value.value.clone())),
        Value::Boolean(boolean) => Some(JsonValue::Bool(boolean.value)),
        Value::List(list) => Some(JsonValue::Array(
            list.values
                .iter()
                .map(|item| value_from_ast_untyped(item, variables).unwrap_or(JsonValue::Null))
                .collect(),
        )),
        Value::Object(object) => Some(JsonValue::Object(
            object
                .fields
                .iter()
                .filter_map(|field| {
                    value_from_ast_untyped(&field.value, variables)
                        .map(|value| (field.name.value.clone(), value))
                })
                .collect(),
        )),
        Value::Variable(variable) => variables?.get(&variable.name.value).cloned(),
    }
}

/// Converts `value` to JSON, checking it against `ty`.
///
/// - A variable is looked up in `variables`; a JSON `null` for a non-null
///   type is rejected.
/// - A non-null type rejects the `null` literal.
/// - `null` is accepted by any nullable type.
/// - A list type requires a list literal whose every item fits the item
///   type.
/// - The built-in scalars `Int`, `Float`, `String` and `Boolean` require
///   the matching literal kind. Other named types accept any literal and
///   convert it untyped.
///
/// Returns `None` whenever the value does not fit.
pub fn value_from_type_node(
    value: &Value,
    ty: &Type,
    variables: Option<&Map<String, JsonValue>>,
) -> Option<JsonValue> {
    if let Value::Variable(variable) = value {
        let resolved = variables?.get(&variable.name.value)?;
        if resolved.is_null() && matches!(ty, Type::NonNull(_)) {
            return None;
        }
        return Some(resolved.clone());
    }

    match ty {
        Type::NonNull(non_null) => {
            if matches!(value, Value::Null(_)) {
                return None;
            }
            match &non_null.ty {
                NullableType::Named(named) => {
                    value_from_named_type(value, &named.name.value, variables)
                },
                NullableType::List(list) => value_from_list_type(value, &list.ty, variables),
            }
        },
        _ if matches!(value, Value::Null(_)) => Some(JsonValue::Null),
        Type::List(list) => value_from_list_type(value, &list.ty, variables),
        Type::Named(named) => value_from_named_type(value, &named.name.value, variables),
    }
}

fn value_from_list_type(
    value: &Value,
    item_type: &Type,
    variables: Option<&Map<String, JsonValue>>,
) -> Option<JsonValue> {
    let Value::List(list) = value else {
        return None;
    };
    list.values
        .iter()
        .map(|item| value_from_type_node(item, item_type, variables))
        .collect::<Option<Vec<_>>>()
        .map(JsonValue::Array)
}

fn value_from_named_type(
    value: &Value,
    type_name: &str,
    variables: Option<&Map<String, JsonValue>>,
) -> Option<JsonValue> {
    let fits = match type_name {
        "Int" => matches!(value, Value::Int(_)),
        "Float" => matches!(value, Value::Float(_)),
        "String" => matches!(value, Value::String(_)),
        "Boolean" => matches!(value, Value::Boolean(_)),
        _ => true,
    };
    if fits {
        value_from_ast_untyped(value, variables)
    } else {
        None
    }
}

/// Integer literals outside the `i64` range become floats.
fn int_to_json(literal: &str) -> Option<JsonValue> {
    match literal.parse::<i64>() {
        Ok(int) => Some(JsonValue::Number(Number::from(int))),
        Err(_) => float_to_json(literal),
    }
}

fn float_to_json(literal: &str) -> Option<JsonValue> {
    let float = literal.parse::<f64>().ok()?;
    Number::from_f64(float).map(JsonValue::Number)
}
