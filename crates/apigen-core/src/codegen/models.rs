use indexmap::IndexSet;
use serde::Serialize;

use crate::extensions::VendorExtensions;

/// A schema decorated with generation metadata. Mutated once per generation
/// pass, then consumed verbatim by templates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenModel {
    /// Raw component name from the document.
    pub name: String,
    /// Generated class name.
    pub classname: String,
    /// Generated file name (without extension).
    pub class_filename: String,
    pub description: Option<String>,

    /// Substituted target type for alias-like, enumeration and wrapper
    /// models.
    pub data_type: Option<String>,
    pub is_enum: bool,
    pub is_alias: bool,
    /// Exactly one declared property.
    pub simple: bool,

    /// Superclass link recovered from `allOf` composition.
    pub parent: Option<String>,

    pub vars: Vec<CodegenProperty>,

    /// Import symbols; insertion order irrelevant, duplicates illegal.
    pub imports: IndexSet<String>,

    pub vendor_extensions: VendorExtensions,

    /// Seeds for generated equality/hash-code methods, odd by construction
    /// so generated classes never collide on value zero.
    pub hash_code_initial: Option<i32>,
    pub hash_code_multiplier: Option<i32>,
}

impl CodegenModel {
    pub fn has_inner_enum(&self) -> bool {
        self.vars.iter().any(|var| var.is_enum)
    }
}

/// A model property decorated with generation metadata. Owned exclusively by
/// its model.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenProperty {
    /// Sanitized variable name.
    pub name: String,
    /// Raw property name from the document.
    pub base_name: String,

    pub data_type: String,
    pub datatype_with_enum: String,
    pub base_type: String,
    pub default_value: String,

    pub required: bool,
    pub is_string: bool,
    pub is_integer: bool,
    pub is_long: bool,
    pub is_float: bool,
    pub is_double: bool,
    pub is_boolean: bool,
    pub is_date: bool,
    pub is_date_time: bool,
    pub is_enum: bool,
    pub is_primitive_type: bool,
    pub is_list_container: bool,

    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub pattern: Option<String>,

    /// Element property for list containers.
    pub items: Option<Box<CodegenProperty>>,

    pub vendor_extensions: VendorExtensions,

    /// Constant-style accessor name, `PN_` + constant-cased property name.
    pub constant_name: Option<String>,
    /// False for enumerations, primitives and externally imported types.
    pub cloneable: bool,
    /// Date-time rendering hint for zone-less date libraries.
    pub no_time_zone: bool,
}

impl CodegenProperty {
    /// True for integer-class types, which take `Min`/`Max` bounds instead of
    /// the decimal variants.
    pub fn is_integer_class(&self) -> bool {
        self.is_integer || self.is_long
    }
}
