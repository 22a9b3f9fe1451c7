use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no usable application name: set serviceName, x-short-name or a document title")]
    MissingAppName,

    #[error("duplicate schema name: {0}")]
    DuplicateSchema(String),
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("failed to build render context: {0}")]
    Context(#[from] serde_json::Error),
}
