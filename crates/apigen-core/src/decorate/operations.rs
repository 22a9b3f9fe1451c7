//! Operation decoration: id resolution, parameter partitioning, response
//! classification and validation-import accumulation.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::codegen::{CodegenOperation, CodegenParameter, CodegenResponse, HttpMethod};
use crate::config::{GeneratorConfig, Library, OperationNaming};
use crate::document::operation::{Operation, Parameter, ParameterLocation};
use crate::naming::{route_to_name, var_name};
use crate::types;

/// Decorates one document operation.
///
/// Path-item level parameters are shared by every method on the path; an
/// operation-level parameter with the same name and location overrides the
/// shared one.
pub fn from_operation(
    config: &GeneratorConfig,
    method: HttpMethod,
    path: &str,
    operation: &Operation,
    shared_parameters: &[Parameter],
) -> CodegenOperation {
    let operation_id = resolve_operation_id(config, method, path, operation);

    let mut path_params = Vec::new();
    let mut query_params = Vec::new();
    let mut header_params = Vec::new();

    for parameter in merge_parameters(shared_parameters, &operation.parameters) {
        let decorated = from_parameter(parameter);
        match parameter.location {
            ParameterLocation::Path => path_params.push(decorated),
            ParameterLocation::Query => query_params.push(decorated),
            ParameterLocation::Header => header_params.push(decorated),
            // Cookie parameters have no generated counterpart.
            ParameterLocation::Cookie => {}
        }
    }

    let body_params = operation
        .request_body
        .as_ref()
        .map(|body| {
            let (data_type, base_type) = body
                .schema
                .as_ref()
                .map(types::resolve_type)
                .unwrap_or_else(|| ("Object".to_string(), "Object".to_string()));
            vec![CodegenParameter {
                param_name: var_name(&base_type),
                base_name: base_type,
                data_type,
                required: body.required,
                is_body_param: true,
                vendor_extensions: body.extensions.clone(),
                ..Default::default()
            }]
        })
        .unwrap_or_default();

    let responses = operation
        .responses
        .iter()
        .map(|(code, response)| CodegenResponse {
            code: code.clone(),
            message: response.description.clone(),
            data_type: response.schema.as_ref().map(|schema| types::resolve_type(schema).0),
        })
        .collect();

    CodegenOperation {
        operation_id,
        http_method: method,
        path: path.to_string(),
        summary: operation.summary.clone(),
        tags: operation.tags.clone(),
        path_params,
        query_params,
        header_params,
        body_params,
        responses,
        vendor_extensions: operation.extensions.clone(),
        group_name: String::new(),
        subresource_operation: false,
        imports: IndexSet::new(),
        has_multiple_2xx_return_codes: false,
    }
}

/// Operation id under the configured naming strategy. The path strategy
/// ignores declared ids entirely; the automatic strategy only falls back to
/// path-derived names when the document declares none.
fn resolve_operation_id(
    config: &GeneratorConfig,
    method: HttpMethod,
    path: &str,
    operation: &Operation,
) -> String {
    match config.operation_naming {
        OperationNaming::Path => route_to_name(method.as_str(), path),
        OperationNaming::Auto => operation
            .operation_id
            .clone()
            .unwrap_or_else(|| route_to_name(method.as_str(), path)),
    }
}

fn merge_parameters<'a>(
    shared: &'a [Parameter],
    own: &'a [Parameter],
) -> Vec<&'a Parameter> {
    let mut merged: Vec<&Parameter> = shared
        .iter()
        .filter(|parameter| {
            !own.iter()
                .any(|other| other.name == parameter.name && other.location == parameter.location)
        })
        .collect();
    merged.extend(own);
    merged
}

fn from_parameter(parameter: &Parameter) -> CodegenParameter {
    let schema = parameter.schema.as_ref();
    let (data_type, _) = schema
        .map(types::resolve_type)
        .unwrap_or_else(|| ("String".to_string(), "String".to_string()));

    CodegenParameter {
        param_name: var_name(&parameter.name),
        base_name: parameter.name.clone(),
        required: parameter.required,
        is_enum: schema.is_some_and(|schema| schema.is_enum()),
        is_integer: data_type == "Integer",
        is_long: data_type == "Long",
        is_path_param: parameter.location == ParameterLocation::Path,
        is_query_param: parameter.location == ParameterLocation::Query,
        is_header_param: parameter.location == ParameterLocation::Header,
        is_body_param: false,
        minimum: schema.and_then(|schema| schema.minimum).map(types::format_bound),
        maximum: schema.and_then(|schema| schema.maximum).map(types::format_bound),
        min_length: schema.and_then(|schema| schema.min_length),
        max_length: schema.and_then(|schema| schema.max_length),
        min_items: schema.and_then(|schema| schema.min_items),
        max_items: schema.and_then(|schema| schema.max_items),
        pattern: schema.and_then(|schema| schema.pattern.clone()),
        vendor_extensions: parameter.extensions.clone(),
        data_type,
    }
}

/// Finalizes a decorated operation: classifies its response set and
/// accumulates the imports its parameter validation needs.
pub fn post_process_operation(operation: &mut CodegenOperation, config: &GeneratorConfig) {
    let distinct_success: HashSet<u16> = operation
        .responses
        .iter()
        .filter(|response| response.is_success())
        .filter_map(|response| response.status())
        .collect();
    operation.has_multiple_2xx_return_codes = distinct_success.len() > 1;

    let mut wanted: Vec<&'static str> = Vec::new();

    if config.library == Library::JaxRs {
        match operation.http_method {
            HttpMethod::Get => wanted.push("GET"),
            HttpMethod::Post => wanted.push("POST"),
            HttpMethod::Put => wanted.push("PUT"),
            HttpMethod::Delete => wanted.push("DELETE"),
            // The remaining verbs are annotated by name in the templates.
            _ => {}
        }
    }

    for parameter in operation
        .path_params
        .iter()
        .chain(&operation.query_params)
        .chain(&operation.header_params)
        .chain(&operation.body_params)
    {
        if parameter.required {
            wanted.push("NotNull");
        }
        if parameter.pattern.is_some() {
            wanted.push("Pattern");
        }
        let integer_class = parameter.is_integer_class();
        if parameter.minimum.is_some() {
            wanted.push(if integer_class { "Min" } else { "DecimalMin" });
        }
        if parameter.maximum.is_some() {
            wanted.push(if integer_class { "Max" } else { "DecimalMax" });
        }
        if parameter.min_length.is_some()
            || parameter.max_length.is_some()
            || parameter.min_items.is_some()
            || parameter.max_items.is_some()
        {
            wanted.push("Size");
        }
        if parameter.is_enum {
            wanted.push("JsonValue");
        }
        // Body payloads are always validated and never null.
        if parameter.is_body_param {
            wanted.push("Valid");
            wanted.push("NotNull");
        }
    }

    for symbol in wanted {
        operation.imports.insert(symbol.to_string());
    }
}
