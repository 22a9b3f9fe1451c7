use indexmap::IndexSet;
use serde::Serialize;

use crate::extensions::VendorExtensions;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// An operation decorated with generation metadata. Created once per
/// document operation, mutated by the grouping and decoration passes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenOperation {
    pub operation_id: String,
    pub http_method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,

    pub path_params: Vec<CodegenParameter>,
    pub query_params: Vec<CodegenParameter>,
    pub header_params: Vec<CodegenParameter>,
    pub body_params: Vec<CodegenParameter>,

    pub responses: Vec<CodegenResponse>,

    pub vendor_extensions: VendorExtensions,

    /// Group this operation was assigned to; set by the grouper.
    pub group_name: String,
    /// True iff the operation's resource path is non-empty; set by the
    /// grouper.
    pub subresource_operation: bool,

    /// Import symbols required for parameter validation, deduplicated by
    /// symbol.
    pub imports: IndexSet<String>,

    /// More than one distinct successful status code.
    pub has_multiple_2xx_return_codes: bool,
}

/// A decorated operation parameter.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenParameter {
    pub param_name: String,
    pub base_name: String,
    pub data_type: String,

    pub required: bool,
    pub is_enum: bool,
    pub is_integer: bool,
    pub is_long: bool,

    pub is_path_param: bool,
    pub is_query_param: bool,
    pub is_header_param: bool,
    pub is_body_param: bool,

    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub pattern: Option<String>,

    pub vendor_extensions: VendorExtensions,
}

impl CodegenParameter {
    pub fn is_integer_class(&self) -> bool {
        self.is_integer || self.is_long
    }
}

/// A decorated response.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenResponse {
    /// Status code as it appears in the document, e.g. `"200"`. Wildcard
    /// ranges like `"2XX"` are kept verbatim.
    pub code: String,
    pub message: Option<String>,
    pub data_type: Option<String>,
}

impl CodegenResponse {
    /// Numeric status code, if the document used one.
    pub fn status(&self) -> Option<u16> {
        self.code.parse().ok()
    }

    /// True iff the code is classified successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status().is_some_and(|code| code / 100 == 2)
    }
}
