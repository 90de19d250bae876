pub mod document;
pub mod security_scheme;

pub use document::{Components, Info, OpenApiDocument, SchemeEntry};
pub use security_scheme::{
    ApiKeyLocation, FlowSlot, HttpAuthScheme, OAuthFlow, OAuthFlows, SchemeKind, SecurityScheme,
};
