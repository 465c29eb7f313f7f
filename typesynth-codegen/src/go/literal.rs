//! Go literals for default and example values.

use crate::go::native::go_native_type;
use serde_json::Value;
use typesynth_design::{Attribute, DataType, Primitive};

/// Returns the compact JSON representation of a value.
#[must_use]
pub fn to_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<error serializing value>".to_string())
}

/// Returns Go code for an untyped value.
///
/// Arrays become `[]interface{}` literals and objects `map[string]interface{}` literals with
/// keys in lexicographic order.
#[must_use]
pub fn go_literal(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(_) => to_json(value),
        Value::Array(items) => go_slice_literal(items),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let body: Vec<_> = entries
                .into_iter()
                .map(|(k, v)| format!("{}: {}", to_json(&Value::String(k.clone())), go_literal(v)))
                .collect();
            format!("map[string]interface{{}}{{{}}}", body.join(", "))
        }
    }
}

/// Returns Go code for a slice of untyped values.
#[must_use]
pub fn go_slice_literal(items: &[Value]) -> String {
    let elems: Vec<_> = items.iter().map(go_literal).collect();
    format!("[]interface{{}}{{{}}}", elems.join(", "))
}

/// Returns Go code initializing a value of `data_type` with `value`.
///
/// Returns `None` when no Go literal can express the value: timestamps, values whose shape
/// does not match the type, and maps with non string keys.
#[must_use]
pub fn go_typed_literal(data_type: &DataType, value: &Value) -> Option<String> {
    match (data_type, value) {
        (DataType::Named(named), _) => go_typed_literal(&named.data_type, value),
        (_, Value::Null) => Some("nil".to_string()),
        (DataType::Primitive(Primitive::DateTime), _) => None,
        (DataType::Primitive(Primitive::Any), _) | (DataType::Object(_), Value::Object(_)) => {
            Some(go_literal(value))
        }
        (DataType::Primitive(Primitive::Boolean), Value::Bool(_))
        | (DataType::Primitive(Primitive::String), Value::String(_)) => Some(go_literal(value)),
        (DataType::Primitive(Primitive::Integer), Value::Number(n))
            if n.is_i64() || n.is_u64() =>
        {
            Some(n.to_string())
        }
        (DataType::Primitive(Primitive::Number), Value::Number(n)) => Some(n.to_string()),
        (DataType::Array(elem), Value::Array(items)) => {
            let elems = items
                .iter()
                .map(|item| go_typed_literal(elem, item))
                .collect::<Option<Vec<_>>>()?;
            Some(format!("{}{{{}}}", go_native_type(data_type), elems.join(", ")))
        }
        (DataType::Map(map), Value::Object(entries))
            if matches!(map.key, DataType::Primitive(Primitive::String)) =>
        {
            let mut sorted: Vec<_> = entries.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let body = sorted
                .into_iter()
                .map(|(k, v)| {
                    go_typed_literal(&map.elem, v)
                        .map(|v| format!("{}: {v}", to_json(&Value::String(k.clone()))))
                })
                .collect::<Option<Vec<_>>>()?;
            Some(format!("{}{{{}}}", go_native_type(data_type), body.join(", ")))
        }
        _ => None,
    }
}

/// Returns Go code for the default value of an attribute, if it has one.
#[must_use]
pub fn go_default_value(attribute: &Attribute) -> Option<String> {
    attribute
        .default_value
        .as_ref()
        .and_then(|value| go_typed_literal(&attribute.data_type, value))
}
