use super::ValidationError;
use super::scheme::SecuritySchemeValidator;
use crate::error::{Result, SchemeGuardError};
use crate::models::{OpenApiDocument, SchemeEntry};
use tokio_util::sync::CancellationToken;

/// Validates every security scheme declared in a document.
///
/// Each scheme is validated fail-fast; a failing scheme contributes exactly
/// one error and the remaining schemes are still checked.
pub struct DocumentValidator<'a> {
    document: &'a OpenApiDocument,
    cancel: &'a CancellationToken,
}

impl<'a> DocumentValidator<'a> {
    pub fn new(document: &'a OpenApiDocument, cancel: &'a CancellationToken) -> Self {
        Self { document, cancel }
    }

    /// Validate all security schemes. Returns `Err` only when cancelled.
    pub fn validate_all(&self) -> Result<DocumentValidationResult> {
        let mut result = DocumentValidationResult::default();

        let Some(schemes) = self.document.security_schemes() else {
            result
                .warnings
                .push(ValidationWarning::new("Document declares no security schemes"));
            return Ok(result);
        };

        let validator = SecuritySchemeValidator::new(self.cancel);

        // Schemes are checked in document order
        for (name, entry) in schemes {
            if self.cancel.is_cancelled() {
                return Err(SchemeGuardError::Cancelled);
            }

            let scheme = match entry {
                SchemeEntry::Scheme(scheme) => scheme,
                SchemeEntry::Reference { reference } => {
                    // Cross-document references are skipped with a warning
                    result.warnings.push(
                        ValidationWarning::new(format!(
                            "Reference '{}' is not resolved; skipped",
                            reference
                        ))
                        .with_scheme_name(name),
                    );
                    continue;
                }
            };

            match validator.validate(scheme) {
                Ok(()) => {
                    tracing::debug!(scheme = %name, "Security scheme accepted");
                    result.accepted.push(name.clone());
                }
                Err(e) if e.is_cancelled() => return Err(SchemeGuardError::Cancelled),
                Err(e) => {
                    // One error per rejected scheme; keep going with the next one
                    tracing::debug!(scheme = %name, kind = %e.kind, "Security scheme rejected");
                    result.errors.push(e.with_scheme_name(name));
                    continue;
                }
            }

            // Only the first populated flow is validated; flag the rest
            if let Some(flows) = &scheme.flows {
                let mut slots = flows.slots().map(|(slot, _)| slot);
                if let Some(first) = slots.next() {
                    let ignored: Vec<String> = slots.map(|s| s.to_string()).collect();
                    if !ignored.is_empty() {
                        result.warnings.push(
                            ValidationWarning::new(format!(
                                "Multiple OAuth flows defined; only '{}' was validated (ignored: {})",
                                first,
                                ignored.join(", ")
                            ))
                            .with_scheme_name(name),
                        );
                    }
                }
            }
        }

        // Update is_valid flag
        result.is_valid = result.errors.is_empty();
        Ok(result)
    }
}

/// Result of validating a document's security schemes
#[derive(Debug, Clone)]
pub struct DocumentValidationResult {
    pub is_valid: bool,
    /// Names of schemes that passed validation, in document order
    pub accepted: Vec<String>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl Default for DocumentValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            accepted: vec![],
            errors: vec![],
            warnings: vec![],
        }
    }
}

/// Validation warning with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub scheme_name: Option<String>,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            scheme_name: None,
            message: message.into(),
        }
    }

    pub fn with_scheme_name(mut self, name: impl Into<String>) -> Self {
        self.scheme_name = Some(name.into());
        self
    }

    /// Format warning message with scheme context
    pub fn format(&self) -> String {
        match &self.scheme_name {
            Some(name) => format!("[scheme: {}] {}", name, self.message),
            None => self.message.clone(),
        }
    }
}
