use super::flows::OAuthFlowsValidator;
use super::rules::{ApplicableFields, applicable_fields};
use super::{Entity, ErrorKind, ValidationError};
use crate::models::security_scheme::SUPPORTED_BEARER_FORMATS;
use crate::models::{ApiKeyLocation, SecurityScheme};
use tokio_util::sync::CancellationToken;

/// Validator for a security scheme
///
/// The scheme kind selects which of `in`/`name`, `bearerFormat` and `flow`
/// may be set. Applicable fields must satisfy their constraints; all others
/// must be empty. The first violation is returned.
pub struct SecuritySchemeValidator<'a> {
    cancel: &'a CancellationToken,
}

impl<'a> SecuritySchemeValidator<'a> {
    pub fn new(cancel: &'a CancellationToken) -> Self {
        Self { cancel }
    }

    pub fn validate(&self, scheme: &SecurityScheme) -> Result<(), ValidationError> {
        if self.cancel.is_cancelled() {
            return Err(ValidationError::cancelled(Entity::SecurityScheme));
        }

        let applicable = applicable_fields(scheme)?;
        tracing::debug!(kind = %scheme.kind, ?applicable, "Validating security scheme");

        self.check_location(scheme, applicable)?;
        self.check_bearer_format(scheme, applicable)?;
        self.check_flows(scheme, applicable)?;

        Ok(())
    }

    /// `in` and `name`
    fn check_location(
        &self,
        scheme: &SecurityScheme,
        applicable: ApplicableFields,
    ) -> Result<(), ValidationError> {
        if applicable.location {
            if ApiKeyLocation::parse(&scheme.location).is_none() {
                return Err(ValidationError::new(
                    ErrorKind::InvalidFieldValue,
                    Entity::SecurityScheme,
                    format!(
                        "Security scheme of type 'apiKey' should have 'in'. It can be 'query' or 'header', not '{}'",
                        scheme.location
                    ),
                )
                .with_field("in")
                .with_value(&scheme.location));
            }
            if scheme.name.is_empty() {
                return Err(ValidationError::new(
                    ErrorKind::MissingField,
                    Entity::SecurityScheme,
                    "Security scheme of type 'apiKey' should have 'name'",
                )
                .with_field("name"));
            }
        } else if !scheme.location.is_empty() {
            return Err(unexpected(scheme, "in", &scheme.location));
        } else if !scheme.name.is_empty() {
            return Err(unexpected(scheme, "name", &scheme.name));
        }

        Ok(())
    }

    fn check_bearer_format(
        &self,
        scheme: &SecurityScheme,
        applicable: ApplicableFields,
    ) -> Result<(), ValidationError> {
        if applicable.bearer_format {
            if !SUPPORTED_BEARER_FORMATS.contains(&scheme.bearer_format.as_str()) {
                return Err(ValidationError::new(
                    ErrorKind::InvalidFieldValue,
                    Entity::SecurityScheme,
                    format!(
                        "Security scheme has unsupported 'bearerFormat' value '{}'",
                        scheme.bearer_format
                    ),
                )
                .with_field("bearerFormat")
                .with_value(&scheme.bearer_format));
            }
        } else if !scheme.bearer_format.is_empty() {
            return Err(unexpected(scheme, "bearerFormat", &scheme.bearer_format));
        }

        Ok(())
    }

    fn check_flows(
        &self,
        scheme: &SecurityScheme,
        applicable: ApplicableFields,
    ) -> Result<(), ValidationError> {
        match (&scheme.flows, applicable.flows) {
            (Some(flows), true) => OAuthFlowsValidator::new(self.cancel)
                .validate(flows)
                .map_err(ValidationError::within_flow),
            (None, true) => Err(ValidationError::new(
                ErrorKind::MissingField,
                Entity::SecurityScheme,
                format!("Security scheme of type '{}' should have 'flow'", scheme.kind),
            )
            .with_field("flow")),
            (Some(_), false) => Err(ValidationError::new(
                ErrorKind::UnexpectedField,
                Entity::SecurityScheme,
                format!("Security scheme of type '{}' can't have 'flow'", scheme.kind),
            )
            .with_field("flow")),
            (None, false) => Ok(()),
        }
    }
}

fn unexpected(scheme: &SecurityScheme, field: &'static str, value: &str) -> ValidationError {
    ValidationError::new(
        ErrorKind::UnexpectedField,
        Entity::SecurityScheme,
        format!(
            "Security scheme of type '{}' can't have '{}'",
            scheme.kind, field
        ),
    )
    .with_field(field)
    .with_value(value)
}

impl SecurityScheme {
    pub fn validate(&self, cancel: &CancellationToken) -> Result<(), ValidationError> {
        SecuritySchemeValidator::new(cancel).validate(self)
    }
}
