use super::ErrorKind;
use crate::models::FlowSlot;
use std::fmt;

/// Entity a validation error was raised on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    SecurityScheme,
    OAuthFlows,
    OAuthFlow,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::SecurityScheme => write!(f, "security scheme"),
            Entity::OAuthFlows => write!(f, "OAuth flows"),
            Entity::OAuthFlow => write!(f, "OAuth flow"),
        }
    }
}

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub entity: Entity,
    /// Document field name (e.g. `bearerFormat`)
    pub field: Option<&'static str>,
    /// Offending value, when there is one
    pub value: Option<String>,
    pub message: String,
    /// Raised inside the flow sub-validation of a security scheme
    pub in_flow: bool,
    pub flow_slot: Option<FlowSlot>,
    pub scheme_name: Option<String>,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, entity: Entity, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity,
            field: None,
            value: None,
            message: message.into(),
            in_flow: false,
            flow_slot: None,
            scheme_name: None,
        }
    }

    pub fn cancelled(entity: Entity) -> Self {
        Self::new(
            ErrorKind::Cancelled,
            entity,
            format!("Validation of {} was cancelled", entity),
        )
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_slot(mut self, slot: FlowSlot) -> Self {
        self.flow_slot = Some(slot);
        self
    }

    pub fn with_scheme_name(mut self, name: impl Into<String>) -> Self {
        self.scheme_name = Some(name.into());
        self
    }

    /// Marks the error as coming from the flow sub-validation.
    /// Cancellation is passed through untouched.
    pub fn within_flow(mut self) -> Self {
        if self.kind != ErrorKind::Cancelled {
            self.in_flow = true;
        }
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ErrorKind::Cancelled
    }

    /// Format error message with scheme and flow context
    pub fn format(&self) -> String {
        let mut parts = Vec::new();

        if let Some(name) = &self.scheme_name {
            parts.push(format!("[scheme: {}]", name));
        }

        if let Some(slot) = self.flow_slot {
            parts.push(format!("[flow: {}]", slot));
        }

        if self.in_flow {
            parts.push(format!("Security scheme 'flow' is invalid: {}", self.message));
        } else {
            parts.push(self.message.clone());
        }

        parts.join(" ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl std::error::Error for ValidationError {}
