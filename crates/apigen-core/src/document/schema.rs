use indexmap::IndexMap;
use serde::Deserialize;

use crate::extensions::VendorExtensions;

/// The `type` keyword of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

/// A resolved schema. Nested schemas are inlined by the resolver; where a
/// nested schema came from a named component, `reference` holds that name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    pub format: Option<String>,

    pub description: Option<String>,

    /// Component name this schema was resolved from, if any.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    // Object shape
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    #[serde(default)]
    pub required: Vec<String>,

    // Array shape
    pub items: Option<Box<Schema>>,

    // Map shape
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<Box<Schema>>,

    // Composition; entries keep their `reference` when they point at a
    // named component, which is how inheritance links are recovered.
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<Schema>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(rename = "default")]
    pub default_value: Option<serde_json::Value>,

    // Numeric constraints
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,

    // String constraints
    #[serde(rename = "minLength")]
    pub min_length: Option<u64>,
    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,
    pub pattern: Option<String>,

    // Array constraints
    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
    #[serde(rename = "maxItems")]
    pub max_items: Option<u64>,

    #[serde(flatten, default)]
    pub extensions: VendorExtensions,
}

impl Schema {
    pub fn is_string(&self) -> bool {
        self.schema_type == Some(SchemaType::String)
    }

    pub fn is_array(&self) -> bool {
        self.schema_type == Some(SchemaType::Array)
    }

    pub fn is_object(&self) -> bool {
        self.schema_type == Some(SchemaType::Object)
            || (self.schema_type.is_none() && (!self.properties.is_empty() || !self.all_of.is_empty()))
    }

    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Name of the component this schema inherits from via `allOf`, if any.
    pub fn parent_reference(&self) -> Option<&str> {
        self.all_of.iter().find_map(|part| part.reference.as_deref())
    }
}
