mod document;
mod error;
mod flow;
mod flows;
mod rules;
mod scheme;

pub use document::{DocumentValidationResult, DocumentValidator, ValidationWarning};
pub use error::{Entity, ValidationError};
pub use flow::OAuthFlowValidator;
pub use flows::OAuthFlowsValidator;
pub use rules::{ApplicableFields, applicable_fields};
pub use scheme::SecuritySchemeValidator;

/// Type of validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `type` is not one of the known scheme kinds
    InvalidKind,
    /// `scheme` of an `http` scheme is not `bearer` or `basic`
    InvalidSchemeValue,
    /// An applicable field carries a value outside its allow-list
    InvalidFieldValue,
    /// A required field is empty
    MissingField,
    /// A field that is not applicable to the scheme kind is set
    UnexpectedField,
    /// No OAuth flow slot is populated
    MissingFlow,
    /// The scheme kind is recognized but not implemented
    UnsupportedFeature,
    /// Validation was aborted through the cancellation token
    Cancelled,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidKind => write!(f, "Invalid scheme kind"),
            ErrorKind::InvalidSchemeValue => write!(f, "Invalid HTTP scheme"),
            ErrorKind::InvalidFieldValue => write!(f, "Invalid field value"),
            ErrorKind::MissingField => write!(f, "Missing field"),
            ErrorKind::UnexpectedField => write!(f, "Unexpected field"),
            ErrorKind::MissingFlow => write!(f, "Missing OAuth flow"),
            ErrorKind::UnsupportedFeature => write!(f, "Unsupported feature"),
            ErrorKind::Cancelled => write!(f, "Cancelled"),
        }
    }
}
