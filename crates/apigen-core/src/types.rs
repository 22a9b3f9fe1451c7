//! Mapping from raw schema types to target-language (Java) type names, plus
//! the default-value policy.

use crate::document::schema::{Schema, SchemaType};

/// Types the target language treats as built-in values.
const PRIMITIVES: [&str; 8] = [
    "String", "Boolean", "Integer", "Long", "Float", "Double", "Object", "byte[]",
];

/// Resolved (data type, base type) pair for a schema.
///
/// For containers the data type carries the full generic expression while
/// the base type names the container class.
pub fn resolve_type(schema: &Schema) -> (String, String) {
    match schema.schema_type {
        Some(SchemaType::String) => {
            let name = match schema.format.as_deref() {
                Some("date") => "LocalDate",
                Some("date-time") => "OffsetDateTime",
                Some("binary" | "byte") => "byte[]",
                _ => "String",
            };
            (name.to_string(), name.to_string())
        }
        Some(SchemaType::Integer) => {
            let name = match schema.format.as_deref() {
                Some("int64") => "Long",
                _ => "Integer",
            };
            (name.to_string(), name.to_string())
        }
        Some(SchemaType::Number) => {
            let name = match schema.format.as_deref() {
                Some("float") => "Float",
                Some("double") => "Double",
                _ => "BigDecimal",
            };
            (name.to_string(), name.to_string())
        }
        Some(SchemaType::Boolean) => ("Boolean".to_string(), "Boolean".to_string()),
        Some(SchemaType::Array) => {
            let inner = schema
                .items
                .as_deref()
                .map(|items| resolve_type(items).0)
                .unwrap_or_else(|| "Object".to_string());
            (format!("List<{inner}>"), "List".to_string())
        }
        Some(SchemaType::Object) | None => {
            if let Some(reference) = schema.reference.as_deref() {
                let class = crate::naming::class_name(reference);
                (class.clone(), class)
            } else if let Some(values) = schema.additional_properties.as_deref() {
                let inner = resolve_type(values).0;
                (format!("Map<String, {inner}>"), "Map".to_string())
            } else {
                ("Object".to_string(), "Object".to_string())
            }
        }
        Some(SchemaType::Null) => ("Object".to_string(), "Object".to_string()),
    }
}

/// Whether a resolved type name is a language primitive.
pub fn is_primitive(type_name: &str) -> bool {
    PRIMITIVES.contains(&type_name)
}

/// Default-value policy: array schemas always default to the null literal
/// regardless of any declared default; otherwise the declared default is
/// rendered as a literal, falling back to the null literal.
pub fn default_value(schema: &Schema) -> String {
    if schema.is_array() {
        return "null".to_string();
    }

    match &schema.default_value {
        Some(serde_json::Value::String(value)) => {
            format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
        }
        Some(serde_json::Value::Number(value)) => value.to_string(),
        Some(serde_json::Value::Bool(value)) => value.to_string(),
        _ => "null".to_string(),
    }
}

/// Renders a numeric constraint bound the way the document declared it.
pub fn format_bound(bound: f64) -> String {
    bound.to_string()
}
