use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Marks a schema as an enumeration with no compile-time dependency on the
/// full value set.
pub const ENUMERATION: &str = "x-enumeration";
/// Names the generated type of an `x-enumeration` schema. Written by the
/// model decorator, never expected from the document.
pub const ENUMERATION_TYPE: &str = "x-enumeration-type";
/// Marks a schema as a thin wrapper around a single value.
pub const WRAPPER: &str = "x-wrapper";
/// Names the substituted type of an `x-wrapper` schema.
pub const WRAPPER_TYPE: &str = "x-wrapper-type";
/// Overrides the group an operation is assigned to.
pub const CLIENT_GROUP: &str = "x-client-group";
/// Document-level short application name override.
pub const SHORT_NAME: &str = "x-short-name";
/// Forces a date/time property onto the offset date-time type.
pub const USE_OFFSET_DATE_TIME: &str = "x-use-offset-date-time";

/// Free-form `x-` prefixed vendor extensions with typed accessors for the
/// keys the generator understands. Unknown extensions pass through untouched
/// so templates can still read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VendorExtensions(IndexMap<String, Value>);

impl<'de> Deserialize<'de> for VendorExtensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Captured via #[serde(flatten)], so every unknown sibling key lands
        // here; only the vendor-extension keys are kept.
        let mut map = IndexMap::<String, Value>::deserialize(deserializer)?;
        map.retain(|key, _| key.starts_with("x-"));
        Ok(VendorExtensions(map))
    }
}

impl VendorExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// True iff the enumeration marker is present.
    pub fn is_enumeration(&self) -> bool {
        self.contains(ENUMERATION)
    }

    pub fn enumeration_type(&self) -> Option<&str> {
        self.get_str(ENUMERATION_TYPE)
    }

    /// True iff the wrapper marker is present.
    pub fn is_wrapper(&self) -> bool {
        self.contains(WRAPPER)
    }

    pub fn wrapper_type(&self) -> Option<&str> {
        self.get_str(WRAPPER_TYPE)
    }

    pub fn client_group(&self) -> Option<&str> {
        self.get_str(CLIENT_GROUP)
    }

    pub fn short_name(&self) -> Option<&str> {
        self.get_str(SHORT_NAME)
    }

    pub fn use_offset_date_time(&self) -> bool {
        self.contains(USE_OFFSET_DATE_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        name: String,
        #[serde(flatten, default)]
        extensions: VendorExtensions,
    }

    #[test]
    fn test_flatten_keeps_only_vendor_keys() {
        let yaml = "name: pet\nx-client-group: store\nignored: true\n";
        let holder: Holder = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(holder.name, "pet");
        assert_eq!(holder.extensions.client_group(), Some("store"));
        assert!(!holder.extensions.contains("ignored"));
    }

    #[test]
    fn test_typed_accessors() {
        let mut ext = VendorExtensions::new();
        assert!(!ext.is_enumeration());
        ext.insert(ENUMERATION, true);
        ext.insert(ENUMERATION_TYPE, "ColorCode");
        assert!(ext.is_enumeration());
        assert_eq!(ext.enumeration_type(), Some("ColorCode"));
        assert_eq!(ext.wrapper_type(), None);
    }

    #[test]
    fn test_missing_extension_is_normal() {
        let ext = VendorExtensions::new();
        assert_eq!(ext.client_group(), None);
        assert!(!ext.use_offset_date_time());
    }
}
