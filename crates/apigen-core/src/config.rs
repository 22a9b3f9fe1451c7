use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::grouping::GroupingStrategy;

/// Configuration for one generation run.
///
/// Constructed once at run start and threaded through every pass. The two
/// derived name fields are written by the short-name extractor and read-only
/// afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Custom API name used for class names; overrides the document title.
    pub service_name: Option<String>,
    pub operation_naming: OperationNaming,
    pub grouping: GroupingStrategy,
    pub library: Library,
    pub generate_json_annotations: bool,
    pub generate_xml_annotations: bool,
    pub serializable_model: bool,
    pub date_library: DateLibrary,

    #[serde(skip)]
    pub import_mapping: ImportMapping,

    /// Capitalized short application name, derived once per run.
    #[serde(skip)]
    pub short_app_name: Option<String>,
    /// Camel-cased short application name, derived once per run.
    #[serde(skip)]
    pub service_endpoint_name: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            service_name: None,
            operation_naming: OperationNaming::Auto,
            grouping: GroupingStrategy::ByBasePath,
            library: Library::JaxRs,
            generate_json_annotations: true,
            generate_xml_annotations: false,
            serializable_model: false,
            date_library: DateLibrary::Java8,
            import_mapping: ImportMapping::default(),
            short_app_name: None,
            service_endpoint_name: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from YAML.
    pub fn from_yaml(input: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(input)
    }
}

/// Naming strategy for operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationNaming {
    /// Use the document's operation id when present, otherwise derive a name
    /// from the operation's path.
    #[default]
    Auto,
    /// Always build a name from the operation's path.
    Path,
}

impl OperationNaming {
    /// Lenient parse: anything that is not `PATH` (case-insensitive) falls
    /// back to `Auto`.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("path") {
            OperationNaming::Path
        } else {
            OperationNaming::Auto
        }
    }
}

impl<'de> Deserialize<'de> for OperationNaming {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(OperationNaming::parse(&value))
    }
}

/// Target server library flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Library {
    #[default]
    JaxRs,
    Spring,
}

/// Which date classes generated code uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum DateLibrary {
    #[serde(rename = "java8")]
    #[default]
    Java8,
    /// Local date-times without zone information; date-time properties carry
    /// a `noTimeZone` hint for the templates.
    #[serde(rename = "java8-localdatetime")]
    Java8LocalDateTime,
}

/// Maps import symbols to fully qualified class names.
///
/// The decorators accumulate symbols; the renderer resolves them through
/// this table. A symbol present here also marks its type as externally
/// provided, which excludes it from clone generation.
#[derive(Debug, Clone)]
pub struct ImportMapping(IndexMap<String, String>);

impl ImportMapping {
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.0.get(symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn insert(&mut self, symbol: impl Into<String>, class: impl Into<String>) {
        self.0.insert(symbol.into(), class.into());
    }

    pub fn remove(&mut self, symbol: &str) {
        self.0.shift_remove(symbol);
    }
}

impl Default for ImportMapping {
    fn default() -> Self {
        let mut mapping = IndexMap::new();
        let entries = [
            // Bean validation
            ("NotNull", "javax.validation.constraints.NotNull"),
            ("Pattern", "javax.validation.constraints.Pattern"),
            ("Min", "javax.validation.constraints.Min"),
            ("Max", "javax.validation.constraints.Max"),
            ("DecimalMin", "javax.validation.constraints.DecimalMin"),
            ("DecimalMax", "javax.validation.constraints.DecimalMax"),
            ("Size", "javax.validation.constraints.Size"),
            ("Valid", "javax.validation.Valid"),
            // JSON annotations
            ("JsonProperty", "com.fasterxml.jackson.annotation.JsonProperty"),
            ("JsonInclude", "com.fasterxml.jackson.annotation.JsonInclude"),
            (
                "JsonInclude.Include",
                "com.fasterxml.jackson.annotation.JsonInclude.Include",
            ),
            ("JsonFormat", "com.fasterxml.jackson.annotation.JsonFormat"),
            ("JsonValue", "com.fasterxml.jackson.annotation.JsonValue"),
            ("JsonCreator", "com.fasterxml.jackson.annotation.JsonCreator"),
            // Equality / hashing / printing helpers
            ("EqualsBuilder", "org.apache.commons.lang3.builder.EqualsBuilder"),
            ("HashCodeBuilder", "org.apache.commons.lang3.builder.HashCodeBuilder"),
            ("ToStringBuilder", "org.apache.commons.lang3.builder.ToStringBuilder"),
            // Runtime types
            ("Serializable", "java.io.Serializable"),
            ("Locale", "java.util.Locale"),
            ("Optional", "java.util.Optional"),
            ("Collectors", "java.util.stream.Collectors"),
            ("ArrayList", "java.util.ArrayList"),
            ("Map", "java.util.Map"),
            ("OffsetDateTime", "java.time.OffsetDateTime"),
            // JAX-RS verbs
            ("GET", "javax.ws.rs.GET"),
            ("POST", "javax.ws.rs.POST"),
            ("PUT", "javax.ws.rs.PUT"),
            ("DELETE", "javax.ws.rs.DELETE"),
            // XML annotations
            ("XmlRootElement", "javax.xml.bind.annotation.XmlRootElement"),
            ("XmlAccessorType", "javax.xml.bind.annotation.XmlAccessorType"),
            ("XmlAccessType", "javax.xml.bind.annotation.XmlAccessType"),
            ("XmlElement", "javax.xml.bind.annotation.XmlElement"),
            ("XmlEnum", "javax.xml.bind.annotation.XmlEnum"),
            ("XmlEnumValue", "javax.xml.bind.annotation.XmlEnumValue"),
            ("XmlAttribute", "javax.xml.bind.annotation.XmlAttribute"),
            (
                "XmlJavaTypeAdapter",
                "javax.xml.bind.annotation.adapters.XmlJavaTypeAdapter",
            ),
            ("XmlElementWrapper", "javax.xml.bind.annotation.XmlElementWrapper"),
            (
                "JacksonXmlProperty",
                "com.fasterxml.jackson.dataformat.xml.annotation.JacksonXmlProperty",
            ),
            (
                "JacksonXmlElementWrapper",
                "com.fasterxml.jackson.dataformat.xml.annotation.JacksonXmlElementWrapper",
            ),
            (
                "OffsetDateTimeXmlAdapter",
                "com.migesok.jaxb.adapter.javatime.OffsetDateTimeXmlAdapter",
            ),
        ];
        for (symbol, class) in entries {
            mapping.insert(symbol.to_string(), class.to_string());
        }
        Self(mapping)
    }
}
