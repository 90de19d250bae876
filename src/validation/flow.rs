use super::{Entity, ErrorKind, ValidationError};
use crate::models::OAuthFlow;
use tokio_util::sync::CancellationToken;

/// Validator for a single OAuth flow
pub struct OAuthFlowValidator<'a> {
    cancel: &'a CancellationToken,
}

impl<'a> OAuthFlowValidator<'a> {
    pub fn new(cancel: &'a CancellationToken) -> Self {
        Self { cancel }
    }

    /// Check required URLs and scopes. URLs are not checked for well-formedness.
    pub fn validate(&self, flow: &OAuthFlow) -> Result<(), ValidationError> {
        if self.cancel.is_cancelled() {
            return Err(ValidationError::cancelled(Entity::OAuthFlow));
        }

        if flow.authorization_url.is_empty() {
            return Err(missing("authorizationUrl"));
        }
        if flow.token_url.is_empty() {
            return Err(missing("tokenUrl"));
        }
        if flow.scopes.is_empty() {
            return Err(missing("scopes"));
        }

        Ok(())
    }
}

fn missing(field: &'static str) -> ValidationError {
    ValidationError::new(
        ErrorKind::MissingField,
        Entity::OAuthFlow,
        format!("An OAuth flow is missing '{}'", field),
    )
    .with_field(field)
}

impl OAuthFlow {
    pub fn validate(&self, cancel: &CancellationToken) -> Result<(), ValidationError> {
        OAuthFlowValidator::new(cancel).validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_flow() -> OAuthFlow {
        OAuthFlow::new("https://example.com/authorize", "https://example.com/token")
            .with_scope("read", "Read access")
    }

    #[test]
    fn test_complete_flow() {
        let cancel = CancellationToken::new();
        assert!(complete_flow().validate(&cancel).is_ok());
    }

    #[test]
    fn test_refresh_url_optional() {
        let cancel = CancellationToken::new();
        let flow = complete_flow().with_refresh_url("https://example.com/refresh");
        assert!(flow.validate(&cancel).is_ok());
    }

    #[test]
    fn test_urls_not_parsed() {
        let cancel = CancellationToken::new();
        let flow = OAuthFlow::new("not a url", "also not a url").with_scope("s", "");
        assert!(flow.validate(&cancel).is_ok());
    }

    #[test]
    fn test_missing_authorization_url() {
        let cancel = CancellationToken::new();
        let mut flow = complete_flow();
        flow.authorization_url.clear();

        let err = flow.validate(&cancel).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
        assert_eq!(err.field, Some("authorizationUrl"));
        assert_eq!(err.message, "An OAuth flow is missing 'authorizationUrl'");
    }

    #[test]
    fn test_missing_token_url() {
        let cancel = CancellationToken::new();
        let mut flow = complete_flow();
        flow.token_url.clear();

        let err = flow.validate(&cancel).unwrap_err();
        assert_eq!(err.field, Some("tokenUrl"));
    }

    #[test]
    fn test_missing_scopes() {
        let cancel = CancellationToken::new();
        let flow = OAuthFlow::new("/authorize", "/token");

        let err = flow.validate(&cancel).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
        assert_eq!(err.field, Some("scopes"));
    }

    #[test]
    fn test_checks_run_in_order() {
        // Everything is missing; authorizationUrl is reported first
        let cancel = CancellationToken::new();
        let err = OAuthFlow::default().validate(&cancel).unwrap_err();
        assert_eq!(err.field, Some("authorizationUrl"));
    }

    #[test]
    fn test_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = complete_flow().validate(&cancel).unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(err.entity, Entity::OAuthFlow);
    }
}
