use apigen_core::config::GeneratorConfig;
use apigen_core::document;
use apigen_core::grouping::GroupingStrategy;
use apigen_core::pipeline::{GenerationContext, build_context};

const STAFF_SERVICE: &str = include_str!("fixtures/staff-service.yaml");

fn staff_context(config: &mut GeneratorConfig) -> GenerationContext {
    let doc = document::from_yaml(STAFF_SERVICE).expect("fixture parses");
    build_context(config, &doc).expect("pipeline succeeds")
}

#[test]
fn test_short_name_prefers_extension_over_title() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    assert_eq!(context.short_app_name, "StaffPortal");
    assert_eq!(context.service_endpoint_name, "staffPortal");
    assert_eq!(config.short_app_name.as_deref(), Some("StaffPortal"));
}

#[test]
fn test_models_are_decorated_in_enumeration_first_order() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    let names: Vec<&str> = context.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["EmployeeStatus", "Employee", "Manager", "BadgeNumber"]);
}

#[test]
fn test_employee_model_decoration() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    let employee = context.models.iter().find(|m| m.name == "Employee").unwrap();
    assert_eq!(employee.classname, "Employee");
    assert!(!employee.simple);
    assert!(employee.hash_code_initial.unwrap() % 2 == 1);
    assert!(employee.hash_code_multiplier.unwrap() % 2 == 1);

    let badge = employee.vars.iter().find(|v| v.name == "badgeNumber").unwrap();
    assert_eq!(badge.data_type, "BadgeNumber");
    assert!(badge.required);
    assert!(badge.cloneable);
    assert_eq!(badge.constant_name.as_deref(), Some("PN_BADGE_NUMBER"));

    let status = employee.vars.iter().find(|v| v.name == "status").unwrap();
    assert_eq!(status.data_type, "EmployeeStatus");
    assert!(!status.is_string);
    assert!(!status.is_primitive_type);

    let hired = employee.vars.iter().find(|v| v.name == "hiredOn").unwrap();
    assert_eq!(hired.data_type, "LocalDate");
    assert!(hired.is_date);

    // An eleven digit bound needs the long literal suffix.
    let salary = employee.vars.iter().find(|v| v.name == "salary").unwrap();
    assert_eq!(salary.maximum.as_deref(), Some("10000000000L"));

    for symbol in ["NotNull", "Size", "Max", "JsonFormat", "HashCodeBuilder"] {
        assert!(employee.imports.contains(symbol), "missing {symbol}");
    }
}

#[test]
fn test_manager_inherits_from_employee() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    let manager = context.models.iter().find(|m| m.name == "Manager").unwrap();
    assert_eq!(manager.parent.as_deref(), Some("Employee"));

    // Only the inline composition part contributes declared properties.
    assert_eq!(manager.vars.len(), 1);
    let reports = &manager.vars[0];
    assert_eq!(reports.name, "reports");
    assert_eq!(reports.data_type, "List<Employee>");
    assert!(reports.is_list_container);
}

#[test]
fn test_wrapper_model_decoration() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    let badge = context.models.iter().find(|m| m.name == "BadgeNumber").unwrap();
    assert_eq!(badge.data_type.as_deref(), Some("BadgeNumber"));
    assert!(!badge.is_alias);
    assert_eq!(badge.vars.len(), 1);
    assert_eq!(badge.vars[0].name, "value");
    assert_eq!(badge.vars[0].constant_name.as_deref(), Some("PN_VALUE"));
}

#[test]
fn test_operations_group_by_base_path() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    assert_eq!(context.groups.len(), 2);
    let employees = context.groups.get("employees").unwrap();
    assert_eq!(employees.len(), 4);
    assert_eq!(context.groups.get("offices").unwrap().len(), 1);

    let list = employees.iter().find(|op| op.operation_id == "listEmployees").unwrap();
    assert!(!list.subresource_operation);
    let get = employees.iter().find(|op| op.operation_id == "getEmployee").unwrap();
    assert!(get.subresource_operation);
    assert_eq!(get.group_name, "employees");
}

#[test]
fn test_client_group_strategy_honors_extension() {
    let mut config = GeneratorConfig {
        grouping: GroupingStrategy::ByClientGroup,
        ..Default::default()
    };
    let context = staff_context(&mut config);

    let facilities = context.groups.get("facilities").unwrap();
    assert!(context.groups.get("offices").is_none());
    // The bucket carries the override name; the operation keeps its base
    // path as the recorded group name.
    assert_eq!(facilities[0].group_name, "offices");
    // Operations without the extension fall back to their base path.
    assert!(context.groups.get("employees").is_some());
}

#[test]
fn test_operation_decoration() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);
    let employees = context.groups.get("employees").unwrap();

    let create = employees.iter().find(|op| op.operation_id == "createEmployee").unwrap();
    assert!(create.has_multiple_2xx_return_codes);
    assert_eq!(create.body_params.len(), 1);
    assert_eq!(create.body_params[0].data_type, "Employee");
    assert!(create.imports.contains("POST"));
    assert!(create.imports.contains("Valid"));

    let get = employees.iter().find(|op| op.operation_id == "getEmployee").unwrap();
    assert!(!get.has_multiple_2xx_return_codes);
    assert_eq!(get.path_params.len(), 1);
    let id = &get.path_params[0];
    assert_eq!(id.param_name, "employeeId");
    assert!(id.is_long);
    assert_eq!(id.minimum.as_deref(), Some("1"));
    for symbol in ["GET", "NotNull", "Min"] {
        assert!(get.imports.contains(symbol), "missing {symbol}");
    }

    // The shared path parameter reaches every method on the path.
    let delete = employees.iter().find(|op| op.operation_id == "deleteEmployee").unwrap();
    assert_eq!(delete.path_params.len(), 1);
    assert!(delete.imports.contains("DELETE"));
}

#[test]
fn test_render_context_is_camel_cased_json() {
    let mut config = GeneratorConfig::default();
    let context = staff_context(&mut config);

    let value = context.render_context().unwrap();

    assert_eq!(value["shortAppName"], "StaffPortal");
    assert_eq!(value["serviceEndpointName"], "staffPortal");
    assert_eq!(value["clientClassname"], "StaffPortalClient");

    let apis = value["apis"].as_array().unwrap();
    assert!(apis.iter().any(|api| api["group"] == "employees" && api["classname"] == "Employees"));

    let employee = value["models"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["name"] == "Employee")
        .unwrap();
    assert!(employee["hashCodeInitial"].is_number());
    assert_eq!(employee["classFilename"], "Employee");

    let create = value["groups"]["employees"]
        .as_array()
        .unwrap()
        .iter()
        .find(|op| op["operationId"] == "createEmployee")
        .unwrap();
    assert_eq!(create["hasMultiple2xxReturnCodes"], true);
    assert_eq!(create["httpMethod"], "POST");
}
