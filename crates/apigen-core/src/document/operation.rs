use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::Schema;
use crate::extensions::VendorExtensions;

/// A path item: one optional operation per HTTP method plus shared
/// parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
}

/// An API operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,

    pub summary: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    #[serde(flatten, default)]
    pub extensions: VendorExtensions,
}

/// Where a parameter lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

/// A path/query/header parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(default)]
    pub required: bool,

    pub schema: Option<Schema>,

    #[serde(flatten, default)]
    pub extensions: VendorExtensions,
}

/// A request body; the resolver collapses the content map to the schema of
/// the preferred media type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub required: bool,

    pub schema: Option<Schema>,

    #[serde(flatten, default)]
    pub extensions: VendorExtensions,
}

/// A response, keyed in the document by status code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    pub description: Option<String>,

    pub schema: Option<Schema>,
}
