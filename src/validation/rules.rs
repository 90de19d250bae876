use super::{Entity, ErrorKind, ValidationError};
use crate::models::{HttpAuthScheme, SchemeKind, SecurityScheme};

/// Fields that may carry a value for a given scheme kind.
/// Fields outside the set must be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicableFields {
    /// `in` and `name`
    pub location: bool,
    pub bearer_format: bool,
    pub flows: bool,
}

impl ApplicableFields {
    pub const NONE: Self = Self {
        location: false,
        bearer_format: false,
        flows: false,
    };

    // bearerFormat is accepted on apiKey schemes as well
    pub const API_KEY: Self = Self {
        location: true,
        bearer_format: true,
        flows: false,
    };

    pub const HTTP_BEARER: Self = Self {
        location: false,
        bearer_format: true,
        flows: false,
    };

    pub const HTTP_BASIC: Self = Self::NONE;

    pub const OAUTH2: Self = Self {
        location: false,
        bearer_format: false,
        flows: true,
    };
}

/// Look up the applicable field set for the scheme's kind
pub fn applicable_fields(scheme: &SecurityScheme) -> Result<ApplicableFields, ValidationError> {
    match scheme.scheme_kind() {
        SchemeKind::ApiKey => Ok(ApplicableFields::API_KEY),
        SchemeKind::Http => match HttpAuthScheme::parse(&scheme.http_scheme) {
            Some(HttpAuthScheme::Bearer) => Ok(ApplicableFields::HTTP_BEARER),
            Some(HttpAuthScheme::Basic) => Ok(ApplicableFields::HTTP_BASIC),
            None => Err(ValidationError::new(
                ErrorKind::InvalidSchemeValue,
                Entity::SecurityScheme,
                format!(
                    "Security scheme of type 'http' has invalid 'scheme' value '{}'",
                    scheme.http_scheme
                ),
            )
            .with_field("scheme")
            .with_value(&scheme.http_scheme)),
        },
        SchemeKind::OAuth2 => Ok(ApplicableFields::OAUTH2),
        SchemeKind::OpenIdConnect => Err(ValidationError::new(
            ErrorKind::UnsupportedFeature,
            Entity::SecurityScheme,
            format!(
                "Support for security schemes with type '{}' has not been implemented",
                scheme.kind
            ),
        )
        .with_field("type")
        .with_value(&scheme.kind)),
        SchemeKind::Other(kind) => Err(ValidationError::new(
            ErrorKind::InvalidKind,
            Entity::SecurityScheme,
            format!("Security scheme 'type' can't be '{}'", kind),
        )
        .with_field("type")
        .with_value(kind)),
    }
}
