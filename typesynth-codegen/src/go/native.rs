//! Go built-in types for untyped contexts.

use typesynth_design::{DataType, Primitive};

/// Returns the Go keyword or standard library type for a primitive.
#[must_use]
pub const fn go_primitive_type(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Boolean => "bool",
        Primitive::Integer => "int",
        Primitive::Number => "float64",
        Primitive::String => "string",
        Primitive::DateTime => "time.Time",
        Primitive::Any => "interface{}",
    }
}

/// Returns the Go built-in type from which instances of `data_type` can be initialized.
///
/// Objects become generic string keyed maps and named types map to their underlying shape.
/// No pointer indirection is ever added.
#[must_use]
pub fn go_native_type(data_type: &DataType) -> String {
    match data_type {
        DataType::Primitive(p) => go_primitive_type(*p).to_string(),
        DataType::Array(elem) => format!("[]{}", go_native_type(elem)),
        DataType::Map(map) => format!(
            "map[{}]{}",
            go_native_type(&map.key),
            go_native_type(&map.elem)
        ),
        DataType::Object(_) => "map[string]interface{}".to_string(),
        DataType::Named(named) => go_native_type(&named.data_type),
    }
}
