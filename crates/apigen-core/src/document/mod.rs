//! Serde model of the API document handed over by the parser collaborator.
//!
//! The parser guarantees that `$ref` pointers are resolved and inlined before
//! the core runs; where a schema originated from a named component, the
//! resolver records that name in [`schema::Schema::reference`].

pub mod operation;
pub mod schema;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::extensions::VendorExtensions;
use operation::PathItem;
use schema::Schema;

/// A resolved API document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Components,
}

impl ApiDocument {
    /// Named component schemas in document order.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.components
            .schemas
            .iter()
            .map(|(name, schema)| (name.as_str(), schema))
    }
}

/// Document metadata. The title is optional here even though the upstream
/// format requires it; the short-name extractor reports the malformed
/// document instead of the parser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    pub title: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(flatten, default)]
    pub extensions: VendorExtensions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

/// Parse a resolved API document from YAML.
pub fn from_yaml(input: &str) -> Result<ApiDocument, serde_yaml_ng::Error> {
    serde_yaml_ng::from_str(input)
}

/// Parse a resolved API document from JSON.
pub fn from_json(input: &str) -> Result<ApiDocument, serde_json::Error> {
    serde_json::from_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let yaml = r#"
info:
  title: Employee Service
  version: "1.0"
paths:
  /employees:
    get:
      operationId: listEmployees
      responses:
        "200":
          description: ok
"#;
        let document = from_yaml(yaml).unwrap();
        assert_eq!(document.info.title.as_deref(), Some("Employee Service"));
        assert_eq!(document.paths.len(), 1);
        assert!(document.paths["/employees"].get.is_some());
    }

    #[test]
    fn test_info_extensions() {
        let yaml = "info:\n  title: Foo\n  x-short-name: foo\n";
        let document = from_yaml(yaml).unwrap();
        assert_eq!(document.info.extensions.short_name(), Some("foo"));
    }
}
