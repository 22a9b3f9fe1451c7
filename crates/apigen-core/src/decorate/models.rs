//! Property/model decoration: enumeration and wrapper overrides, import
//! accumulation, identity metadata and inheritance linkage.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::warn;

use crate::codegen::{CodegenModel, CodegenProperty};
use crate::config::{DateLibrary, GeneratorConfig};
use crate::document::schema::Schema;
use crate::error::ConfigurationError;
use crate::extensions::ENUMERATION_TYPE;
use crate::naming::{class_name, constant_name, var_name};
use crate::types;

/// XML annotation symbols added to every model when XML annotations are
/// enabled.
const XML_IMPORTS: [&str; 11] = [
    "XmlRootElement",
    "XmlAccessorType",
    "XmlAccessType",
    "JacksonXmlProperty",
    "XmlElement",
    "XmlEnumValue",
    "XmlJavaTypeAdapter",
    "OffsetDateTimeXmlAdapter",
    "XmlAttribute",
    "JacksonXmlElementWrapper",
    "XmlElementWrapper",
];

/// Re-sorts the document's schema collection so that every
/// enumeration-marked schema precedes every other schema, stable within each
/// partition.
///
/// Properties referencing an enumeration by name resolve against the
/// enumerations already seen, so this must run before any per-schema
/// processing. A duplicate schema name means the document is invalid.
pub fn reorder_schemas<'a, I>(
    schemas: I,
) -> Result<Vec<(&'a str, &'a Schema)>, ConfigurationError>
where
    I: IntoIterator<Item = (&'a str, &'a Schema)>,
{
    let mut seen = HashSet::new();
    let mut enumerations = Vec::new();
    let mut others = Vec::new();

    for (name, schema) in schemas {
        if !seen.insert(name) {
            return Err(ConfigurationError::DuplicateSchema(name.to_string()));
        }
        if schema.extensions.is_enumeration() {
            enumerations.push((name, schema));
        } else {
            others.push((name, schema));
        }
    }

    enumerations.extend(others);
    Ok(enumerations)
}

/// Decorates schemas into [`CodegenModel`]s. Keeps track of the
/// enumeration-marked schemas it has seen so that later properties can
/// resolve enumeration references by component name.
pub struct ModelDecorator<'a> {
    config: &'a GeneratorConfig,
    known_enumerations: IndexSet<String>,
}

impl<'a> ModelDecorator<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            known_enumerations: IndexSet::new(),
        }
    }

    /// Decorates a single property.
    pub fn from_property(&self, name: &str, schema: &Schema, required: bool) -> CodegenProperty {
        let (data_type, base_type) = types::resolve_type(schema);

        let mut property = CodegenProperty {
            name: var_name(name),
            base_name: name.to_string(),
            datatype_with_enum: data_type.clone(),
            default_value: types::default_value(schema),
            required,
            is_string: data_type == "String",
            is_integer: data_type == "Integer",
            is_long: data_type == "Long",
            is_float: data_type == "Float",
            is_double: data_type == "Double",
            is_boolean: data_type == "Boolean",
            is_date: schema.format.as_deref() == Some("date"),
            is_date_time: schema.format.as_deref() == Some("date-time"),
            is_enum: schema.is_enum(),
            is_primitive_type: types::is_primitive(&base_type),
            is_list_container: schema.is_array(),
            minimum: schema.minimum.map(types::format_bound),
            maximum: schema.maximum.map(types::format_bound),
            min_length: schema.min_length,
            max_length: schema.max_length,
            min_items: schema.min_items,
            max_items: schema.max_items,
            pattern: schema.pattern.clone(),
            items: schema
                .items
                .as_deref()
                .map(|items| Box::new(self.from_property(name, items, false))),
            vendor_extensions: schema.extensions.clone(),
            data_type,
            base_type,
            constant_name: None,
            cloneable: false,
            no_time_zone: false,
        };

        if let Some(enumeration_type) = self.enumeration_type_for(schema) {
            property.data_type = enumeration_type.clone();
            property.datatype_with_enum = enumeration_type.clone();
            property.base_type = enumeration_type;
            property.is_primitive_type = false;

            if schema.is_string() {
                // The semantic type is no longer a plain string, so the
                // string-specific constraints no longer apply.
                property.is_string = false;
                property.min_length = None;
                property.max_length = None;
            }
        }

        property
    }

    /// Decorates a named schema into a model.
    pub fn from_model(&mut self, name: &str, schema: &Schema) -> CodegenModel {
        let classname = class_name(name);

        let vars: Vec<CodegenProperty> = declared_properties(schema)
            .into_iter()
            .map(|(prop_name, prop_schema, required)| {
                self.from_property(prop_name, prop_schema, required)
            })
            .collect();

        let mut model = CodegenModel {
            name: name.to_string(),
            class_filename: classname.clone(),
            classname,
            description: schema.description.clone(),
            data_type: (!schema.is_object()).then(|| types::resolve_type(schema).0),
            is_enum: schema.is_enum(),
            is_alias: !schema.is_object() && !schema.is_enum() && schema.properties.is_empty(),
            simple: false,
            parent: None,
            vars,
            imports: IndexSet::new(),
            vendor_extensions: schema.extensions.clone(),
            hash_code_initial: None,
            hash_code_multiplier: None,
        };

        if schema.extensions.is_enumeration() {
            self.known_enumerations.insert(model.classname.clone());
            model
                .vendor_extensions
                .insert(ENUMERATION_TYPE, model.classname.clone());

            if self.config.generate_json_annotations {
                model.imports.insert("JsonCreator".to_string());
                model.imports.insert("JsonValue".to_string());
            }
            model.imports.insert("Locale".to_string());

            // String definitions would otherwise count as an alias of the
            // plain string type and never get generated.
            model.is_alias = false;
        } else if schema.extensions.is_wrapper() {
            let wrapper_type = schema
                .extensions
                .wrapper_type()
                .map(str::to_string)
                .unwrap_or_else(|| model.classname.clone());
            model.data_type = Some(wrapper_type);
            model.is_alias = false;

            if !model.vars.iter().any(|var| var.name == "value") {
                model.vars.push(self.synthetic_value_property(schema));
            }
        } else if !model.is_enum {
            if self.config.generate_json_annotations {
                model.imports.insert("JsonProperty".to_string());
                model.imports.insert("JsonInclude".to_string());
                model.imports.insert("JsonInclude.Include".to_string());
            }

            model.hash_code_initial = Some(identity_seed(&model.name, 57));
            model.hash_code_multiplier = Some(identity_seed(&model.class_filename, 61));
            for symbol in [
                "HashCodeBuilder",
                "EqualsBuilder",
                "ToStringBuilder",
                "Collectors",
                "Optional",
                "ArrayList",
            ] {
                model.imports.insert(symbol.to_string());
            }

            for var in &mut model.vars {
                var.constant_name = Some(format!("PN_{}", constant_name(&var.name)));
                let is_cloneable = cloneable(var, self.config);
                var.cloneable = is_cloneable;
                if var.is_list_container {
                    if let Some(items) = var.items.as_deref_mut() {
                        let items_cloneable = cloneable(items, self.config);
                        items.cloneable = items_cloneable;
                    }
                }
            }

            model.simple = model.vars.len() == 1;
        } else if self.config.generate_json_annotations {
            // Enum class.
            model.imports.insert("JsonValue".to_string());
        }

        if model.has_inner_enum() && self.config.generate_json_annotations {
            model.imports.insert("JsonValue".to_string());
        }

        if self.config.serializable_model {
            model.imports.insert("Serializable".to_string());
        }

        if self.config.generate_xml_annotations {
            for symbol in XML_IMPORTS {
                model.imports.insert(symbol.to_string());
            }
        }

        model
    }

    /// Resolved enumeration type for a schema, either from its own vendor
    /// fields or from an already-seen enumeration component it references.
    fn enumeration_type_for(&self, schema: &Schema) -> Option<String> {
        if schema.extensions.is_enumeration() {
            if let Some(enumeration_type) = schema.extensions.enumeration_type() {
                return Some(enumeration_type.to_string());
            }
            return schema.reference.as_deref().map(class_name);
        }

        let class = class_name(schema.reference.as_deref()?);
        self.known_enumerations.contains(&class).then_some(class)
    }

    /// A wrapper model with no declared fields would render with an empty
    /// body, so a `value` property is manufactured for it.
    fn synthetic_value_property(&self, schema: &Schema) -> CodegenProperty {
        let mut property = self.from_property("value", schema, true);
        property.is_primitive_type = false;
        property.constant_name = Some("PN_VALUE".to_string());
        property.cloneable = false;
        property
    }
}

/// Declared properties of a schema, including the inline parts of an
/// `allOf` composition (referenced parents are handled by the inheritance
/// pass instead).
fn declared_properties(schema: &Schema) -> Vec<(&str, &Schema, bool)> {
    let mut properties: Vec<(&str, &Schema, bool)> = schema
        .properties
        .iter()
        .map(|(name, prop)| (name.as_str(), prop, schema.required.contains(name)))
        .collect();

    for part in &schema.all_of {
        if part.reference.is_none() {
            for (name, prop) in &part.properties {
                properties.push((name.as_str(), prop, part.required.contains(name)));
            }
        }
    }

    properties
}

/// Accumulates validation and formatting imports onto the owning model and
/// finalizes constraint literals, one pass per model.
pub fn post_process_model_properties(model: &mut CodegenModel, config: &GeneratorConfig) {
    let CodegenModel { imports, vars, .. } = model;

    for property in vars.iter_mut() {
        if property.is_date || property.is_date_time {
            imports.insert("JsonFormat".to_string());
            if config.date_library == DateLibrary::Java8LocalDateTime {
                property.no_time_zone = true;
            }
        }

        if property.pattern.is_some() {
            imports.insert("Pattern".to_string());
        }

        let integer_class = property.is_integer_class();
        if let Some(minimum) = property.minimum.as_mut() {
            imports.insert(if integer_class { "Min" } else { "DecimalMin" }.to_string());
            append_long_suffix(minimum);
        }
        if let Some(maximum) = property.maximum.as_mut() {
            imports.insert(if integer_class { "Max" } else { "DecimalMax" }.to_string());
            append_long_suffix(maximum);
        }

        if property.required {
            imports.insert("NotNull".to_string());
        }

        if property.min_length.is_some()
            || property.max_length.is_some()
            || property.min_items.is_some()
            || property.max_items.is_some()
        {
            imports.insert("Size".to_string());
        }

        // Validation must cascade into anything that is itself a model.
        if !property.is_primitive_type
            && !property.is_float
            && !property.is_date
            && !property.is_date_time
        {
            imports.insert("Valid".to_string());
        }

        if property.vendor_extensions.use_offset_date_time() {
            imports.insert("OffsetDateTime".to_string());
            property.data_type = "OffsetDateTime".to_string();
            property.datatype_with_enum = "OffsetDateTime".to_string();
            property.base_type = "OffsetDateTime".to_string();
        }
    }
}

/// Integral literals of ten or more digits overflow default 32-bit literal
/// parsing and need the long suffix.
fn append_long_suffix(bound: &mut String) {
    if bound.len() >= 10 && !bound.contains('.') {
        bound.push('L');
    }
}

/// Links models to their `allOf` parents. An unresolvable parent is logged
/// and skipped rather than failing the run.
pub fn post_process_inheritance(models: &mut [CodegenModel], schemas: &[(&str, &Schema)]) {
    let known: HashSet<String> = models.iter().map(|model| model.classname.clone()).collect();

    for (name, schema) in schemas {
        let Some(parent_ref) = schema.parent_reference() else {
            continue;
        };
        let Some(model) = models.iter_mut().find(|model| model.name == *name) else {
            continue;
        };

        let parent_class = class_name(parent_ref);
        if known.contains(&parent_class) {
            model.parent = Some(parent_class);
        } else {
            warn!(
                "cannot resolve parent schema {parent_ref} of {name}; generating without a superclass"
            );
        }
    }
}

fn cloneable(property: &CodegenProperty, config: &GeneratorConfig) -> bool {
    !(property.is_enum
        || property.is_primitive_type
        || config.import_mapping.contains(&property.data_type))
}

fn identity_seed(text: &str, modulus: u32) -> i32 {
    (name_hash(text).unsigned_abs() % modulus) as i32 * 2 + 1
}

/// Classic 31-polynomial string hash over UTF-16 code units; deterministic
/// across runs so generated equality code is stable.
fn name_hash(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash
}
