//! Generation driver: runs every decoration pass in order and produces the
//! context consumed by template renderers.

use log::debug;
use serde::Serialize;

use crate::codegen::{CodegenModel, HttpMethod};
use crate::config::GeneratorConfig;
use crate::decorate::{
    ModelDecorator, from_operation, post_process_inheritance, post_process_model_properties,
    post_process_operation, reorder_schemas,
};
use crate::document::ApiDocument;
use crate::document::operation::{Operation, PathItem};
use crate::error::GeneratorError;
use crate::grouping::OperationGroups;
use crate::naming;
use crate::short_name::extract_short_app_name;

/// Everything a template renderer needs for one generation run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    pub short_app_name: String,
    pub service_endpoint_name: String,
    /// Generated client proxy class name, short app name + `Client`.
    pub client_classname: String,
    pub models: Vec<CodegenModel>,
    pub groups: OperationGroups,
    /// One generated API class per group, in group order.
    pub apis: Vec<ApiClass>,
}

/// Class name assigned to one operation group.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClass {
    pub group: String,
    pub classname: String,
}

impl GenerationContext {
    /// The context as the JSON value handed to [`crate::TemplateRenderer`]
    /// implementations.
    pub fn render_context(&self) -> Result<serde_json::Value, GeneratorError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Runs the full decoration pipeline over a resolved document.
///
/// Pass order is load-bearing: the short name is derived first because model
/// decoration reads the configuration it writes to, schemas are reordered so
/// enumerations precede their referrers, and inheritance is linked only after
/// every model exists.
pub fn build_context(
    config: &mut GeneratorConfig,
    document: &ApiDocument,
) -> Result<GenerationContext, GeneratorError> {
    let short_app_name = extract_short_app_name(config, document)?;
    let config = &*config;
    let service_endpoint_name = config
        .service_endpoint_name
        .clone()
        .unwrap_or_default();

    let ordered = reorder_schemas(document.schemas())?;
    debug!("decorating {} schemas", ordered.len());

    let mut decorator = ModelDecorator::new(config);
    let mut models: Vec<CodegenModel> = ordered
        .iter()
        .map(|(name, schema)| {
            let mut model = decorator.from_model(name, schema);
            post_process_model_properties(&mut model, config);
            model
        })
        .collect();
    post_process_inheritance(&mut models, &ordered);

    let mut groups = OperationGroups::new();
    for (path, path_item) in &document.paths {
        for (method, operation) in path_item_operations(path_item) {
            let mut decorated =
                from_operation(config, method, path, operation, &path_item.parameters);
            post_process_operation(&mut decorated, config);

            if operation.tags.is_empty() {
                groups.add_operation_to_group(config.grouping, "", path, &mut decorated);
            } else {
                for tag in &operation.tags {
                    groups.add_operation_to_group(config.grouping, tag, path, &mut decorated);
                }
            }
        }
    }
    debug!("grouped operations into {} groups", groups.len());

    let apis = groups
        .names()
        .map(|group| ApiClass {
            group: group.to_string(),
            classname: naming::api_name(group),
        })
        .collect();

    Ok(GenerationContext {
        client_classname: naming::client_api_name(&short_app_name),
        short_app_name,
        service_endpoint_name,
        models,
        groups,
        apis,
    })
}

fn path_item_operations(item: &PathItem) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    [
        (HttpMethod::Get, &item.get),
        (HttpMethod::Post, &item.post),
        (HttpMethod::Put, &item.put),
        (HttpMethod::Delete, &item.delete),
        (HttpMethod::Patch, &item.patch),
        (HttpMethod::Options, &item.options),
        (HttpMethod::Head, &item.head),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|operation| (method, operation)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;
    use crate::error::ConfigurationError;

    const DOCUMENT: &str = r#"
info:
  title: Employee Service
paths:
  /employees:
    get:
      operationId: listEmployees
      responses:
        "200":
          description: ok
    post:
      operationId: createEmployee
      responses:
        "201":
          description: created
  /employees/{id}:
    parameters:
      - name: id
        in: path
        required: true
        schema:
          type: string
    get:
      operationId: getEmployee
      responses:
        "200":
          description: ok
components:
  schemas:
    Employee:
      type: object
      required: [name]
      properties:
        name:
          type: string
        status:
          type: string
          x-enumeration: true
          x-enumeration-type: EmployeeStatus
    EmployeeStatus:
      type: string
      x-enumeration: true
"#;

    #[test]
    fn test_full_pipeline() {
        let doc = document::from_yaml(DOCUMENT).unwrap();
        let mut config = GeneratorConfig::default();

        let context = build_context(&mut config, &doc).unwrap();

        assert_eq!(context.short_app_name, "EmployeeService");
        assert_eq!(context.service_endpoint_name, "employeeService");
        assert_eq!(context.client_classname, "EmployeeServiceClient");
        assert_eq!(context.apis.len(), 1);
        assert_eq!(context.apis[0].group, "employees");
        assert_eq!(context.apis[0].classname, "Employees");

        // Enumerations float to the front.
        assert_eq!(context.models[0].name, "EmployeeStatus");
        assert_eq!(context.models[1].name, "Employee");

        let employee = &context.models[1];
        let status = employee.vars.iter().find(|var| var.name == "status").unwrap();
        assert_eq!(status.data_type, "EmployeeStatus");

        let group = context.groups.get("employees").unwrap();
        assert_eq!(group.len(), 3);
        assert!(group.iter().any(|op| op.operation_id == "getEmployee"));
    }

    #[test]
    fn test_render_context_shape() {
        let doc = document::from_yaml(DOCUMENT).unwrap();
        let mut config = GeneratorConfig::default();
        let context = build_context(&mut config, &doc).unwrap();

        let value = context.render_context().unwrap();

        assert_eq!(value["shortAppName"], "EmployeeService");
        assert!(value["models"].is_array());
        assert!(value["groups"]["employees"].is_array());
        let get = value["groups"]["employees"]
            .as_array()
            .unwrap()
            .iter()
            .find(|op| op["operationId"] == "getEmployee")
            .unwrap();
        assert_eq!(get["subresourceOperation"], true);
        assert_eq!(get["httpMethod"], "GET");
    }

    #[test]
    fn test_missing_title_and_name_fails() {
        let doc = document::from_yaml("paths: {}\n").unwrap();
        let mut config = GeneratorConfig::default();

        let result = build_context(&mut config, &doc);

        assert!(matches!(
            result,
            Err(GeneratorError::Configuration(ConfigurationError::MissingAppName))
        ));
    }
}
