use super::flow::OAuthFlowValidator;
use super::{Entity, ErrorKind, ValidationError};
use crate::models::OAuthFlows;
use tokio_util::sync::CancellationToken;

/// Validator for the OAuth flows object
pub struct OAuthFlowsValidator<'a> {
    cancel: &'a CancellationToken,
}

impl<'a> OAuthFlowsValidator<'a> {
    pub fn new(cancel: &'a CancellationToken) -> Self {
        Self { cancel }
    }

    /// Validate the first populated slot (implicit, password,
    /// clientCredentials, authorizationCode). Later slots are not inspected,
    /// so a collection with several flows is not rejected.
    pub fn validate(&self, flows: &OAuthFlows) -> Result<(), ValidationError> {
        if self.cancel.is_cancelled() {
            return Err(ValidationError::cancelled(Entity::OAuthFlows));
        }

        let Some((slot, flow)) = flows.slots().next() else {
            return Err(ValidationError::new(
                ErrorKind::MissingFlow,
                Entity::OAuthFlows,
                "No OAuth flow is defined",
            ));
        };

        tracing::debug!(slot = %slot, "Validating OAuth flow");

        OAuthFlowValidator::new(self.cancel)
            .validate(flow)
            .map_err(|e| e.with_slot(slot))
    }
}

impl OAuthFlows {
    pub fn validate(&self, cancel: &CancellationToken) -> Result<(), ValidationError> {
        OAuthFlowsValidator::new(cancel).validate(self)
    }
}
