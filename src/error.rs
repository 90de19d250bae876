use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemeGuardError {
    #[error("Failed to load OpenAPI file: {0}")]
    OpenApiLoadError(String),

    #[error("Unsupported OpenAPI version: {0}. Only 3.0.x and 3.1.x are supported.")]
    UnsupportedVersion(String),

    #[error("Unknown field '{field}' in {entity}")]
    UnknownField { entity: String, field: String },

    #[error("Validation error: {0}")]
    ValidationError(#[from] crate::validation::ValidationError),

    #[error("Validation cancelled")]
    Cancelled,

    #[error("Logging setup failed: {0}")]
    LoggingError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemeGuardError>;
