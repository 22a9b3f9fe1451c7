use crate::config::GeneratorConfig;
use crate::document::ApiDocument;
use crate::error::ConfigurationError;
use crate::naming::{camelize_spaced_string, capitalize};

/// Resolves the short application name and stores both derived forms in the
/// configuration.
///
/// The following sources are checked in order and the first available one
/// wins: the `service_name` configuration value, the document's
/// `x-short-name` extension, the document title. The chosen raw string is
/// camel-cased into the service endpoint name; its capitalized form is the
/// short app name, which is also returned.
pub fn extract_short_app_name(
    config: &mut GeneratorConfig,
    document: &ApiDocument,
) -> Result<String, ConfigurationError> {
    let raw = config
        .service_name
        .clone()
        .or_else(|| document.info.extensions.short_name().map(str::to_string))
        .or_else(|| document.info.title.clone())
        .ok_or(ConfigurationError::MissingAppName)?;

    let service_endpoint_name = camelize_spaced_string(&raw);
    let short_app_name = capitalize(&service_endpoint_name);

    config.service_endpoint_name = Some(service_endpoint_name);
    config.short_app_name = Some(short_app_name.clone());

    Ok(short_app_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;

    fn document_with(title: Option<&str>, short_name: Option<&str>) -> ApiDocument {
        let mut doc = ApiDocument::default();
        doc.info.title = title.map(str::to_string);
        if let Some(name) = short_name {
            doc.info.extensions.insert(crate::extensions::SHORT_NAME, name);
        }
        doc
    }

    #[test]
    fn test_service_name_wins_over_everything() {
        let doc = document_with(Some("Ignored"), Some("baz"));
        let mut config = GeneratorConfig {
            service_name: Some("Foo Bar".to_string()),
            ..Default::default()
        };

        let short = extract_short_app_name(&mut config, &doc).unwrap();

        assert_eq!(short, "FooBar");
        assert_eq!(config.short_app_name.as_deref(), Some("FooBar"));
        assert_eq!(config.service_endpoint_name.as_deref(), Some("fooBar"));
    }

    #[test]
    fn test_extension_wins_over_title() {
        let doc = document_with(Some("Ignored"), Some("staff portal"));
        let mut config = GeneratorConfig::default();

        let short = extract_short_app_name(&mut config, &doc).unwrap();

        assert_eq!(short, "StaffPortal");
    }

    #[test]
    fn test_title_fallback() {
        let doc = document_with(Some("Some Sample REST Application"), None);
        let mut config = GeneratorConfig::default();

        let short = extract_short_app_name(&mut config, &doc).unwrap();

        assert_eq!(short, "SomeSampleRestApplication");
        assert_eq!(
            config.service_endpoint_name.as_deref(),
            Some("someSampleRestApplication")
        );
    }

    #[test]
    fn test_missing_everything_fails() {
        let doc = document_with(None, None);
        let mut config = GeneratorConfig::default();

        let result = extract_short_app_name(&mut config, &doc);

        assert!(matches!(result, Err(ConfigurationError::MissingAppName)));
    }

    #[test]
    fn test_extension_from_parsed_document() {
        let yaml = "info:\n  title: Long Winded Title\n  x-short-name: payroll\n";
        let doc = document::from_yaml(yaml).unwrap();
        let mut config = GeneratorConfig::default();

        assert_eq!(extract_short_app_name(&mut config, &doc).unwrap(), "Payroll");
    }
}
