use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Vendor extensions and any other keys not covered by the typed fields
pub type Extensions = IndexMap<String, serde_json::Value>;

/// Bearer formats accepted in `bearerFormat`
pub const SUPPORTED_BEARER_FORMATS: &[&str] = &["", "JWT"];

/// Header name used by the CSRF preset
pub const CSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";

/// Security Scheme object
/// https://spec.openapis.org/oas/v3.0.3#security-scheme-object
///
/// Every attribute is kept as the raw string found in the document so that
/// invalid values reach the validator instead of failing at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// Scheme kind (`apiKey`, `http`, `oauth2`, `openIdConnect`)
    #[serde(
        default,
        rename = "type",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub kind: String,

    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,

    /// Header or query parameter name for `apiKey`
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    /// Where the credential travels (`query` or `header`)
    #[serde(
        default,
        rename = "in",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub location: String,

    /// HTTP authorization scheme for `http` (`bearer` or `basic`)
    #[serde(
        default,
        rename = "scheme",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub http_scheme: String,

    #[serde(
        default,
        rename = "bearerFormat",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub bearer_format: String,

    #[serde(
        default,
        rename = "flow",
        alias = "flows",
        skip_serializing_if = "Option::is_none"
    )]
    pub flows: Option<OAuthFlows>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl SecurityScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// `apiKey` scheme carrying a CSRF token in the `X-XSRF-TOKEN` header
    pub fn csrf() -> Self {
        Self::new()
            .with_type("apiKey")
            .with_in("header")
            .with_name(CSRF_HEADER_NAME)
    }

    /// `http` bearer scheme with JWT tokens
    pub fn jwt_bearer() -> Self {
        Self::new()
            .with_type("http")
            .with_scheme("bearer")
            .with_bearer_format("JWT")
    }

    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.kind = value.into();
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self
    }

    pub fn with_in(mut self, value: impl Into<String>) -> Self {
        self.location = value.into();
        self
    }

    pub fn with_scheme(mut self, value: impl Into<String>) -> Self {
        self.http_scheme = value.into();
        self
    }

    pub fn with_bearer_format(mut self, value: impl Into<String>) -> Self {
        self.bearer_format = value.into();
        self
    }

    pub fn with_flows(mut self, flows: OAuthFlows) -> Self {
        self.flows = Some(flows);
        self
    }

    /// Parsed scheme kind
    pub fn scheme_kind(&self) -> SchemeKind {
        SchemeKind::parse(&self.kind)
    }

    /// Keys captured as extensions that are not `x-` vendor extensions
    pub fn unknown_fields(&self) -> Vec<&str> {
        unknown_keys(&self.extensions)
    }
}

/// OAuth Flows object
///
/// Holds up to one flow per grant type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,

    #[serde(
        default,
        rename = "clientCredentials",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_credentials: Option<OAuthFlow>,

    #[serde(
        default,
        rename = "authorizationCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub authorization_code: Option<OAuthFlow>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl OAuthFlows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_implicit(mut self, flow: OAuthFlow) -> Self {
        self.implicit = Some(flow);
        self
    }

    pub fn with_password(mut self, flow: OAuthFlow) -> Self {
        self.password = Some(flow);
        self
    }

    pub fn with_client_credentials(mut self, flow: OAuthFlow) -> Self {
        self.client_credentials = Some(flow);
        self
    }

    pub fn with_authorization_code(mut self, flow: OAuthFlow) -> Self {
        self.authorization_code = Some(flow);
        self
    }

    /// Populated slots in fixed order: implicit, password,
    /// clientCredentials, authorizationCode
    pub fn slots(&self) -> impl Iterator<Item = (FlowSlot, &OAuthFlow)> {
        [
            (FlowSlot::Implicit, self.implicit.as_ref()),
            (FlowSlot::Password, self.password.as_ref()),
            (FlowSlot::ClientCredentials, self.client_credentials.as_ref()),
            (FlowSlot::AuthorizationCode, self.authorization_code.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, flow)| flow.map(|f| (slot, f)))
    }

    pub fn unknown_fields(&self) -> Vec<&str> {
        unknown_keys(&self.extensions)
    }
}

/// OAuth Flow object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlow {
    #[serde(
        default,
        rename = "authorizationUrl",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub authorization_url: String,

    #[serde(
        default,
        rename = "tokenUrl",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub token_url: String,

    #[serde(
        default,
        rename = "refreshUrl",
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub refresh_url: String,

    /// Scope name to description
    #[serde(default, deserialize_with = "null_default")]
    pub scopes: IndexMap<String, String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl OAuthFlow {
    pub fn new(authorization_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            authorization_url: authorization_url.into(),
            token_url: token_url.into(),
            ..Self::default()
        }
    }

    pub fn with_refresh_url(mut self, value: impl Into<String>) -> Self {
        self.refresh_url = value.into();
        self
    }

    /// Adds a scope, replacing the description if the name already exists
    pub fn with_scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }

    pub fn unknown_fields(&self) -> Vec<&str> {
        unknown_keys(&self.extensions)
    }
}

/// Treat an explicit null (`scopes:`, `description: ~`) like a missing key
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn unknown_keys(extensions: &Extensions) -> Vec<&str> {
    extensions
        .keys()
        .map(String::as_str)
        .filter(|key| !key.starts_with("x-"))
        .collect()
}

/// Grant type slot in an `OAuthFlows` object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowSlot {
    Implicit,
    Password,
    ClientCredentials,
    AuthorizationCode,
}

impl FlowSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowSlot::Implicit => "implicit",
            FlowSlot::Password => "password",
            FlowSlot::ClientCredentials => "clientCredentials",
            FlowSlot::AuthorizationCode => "authorizationCode",
        }
    }
}

impl fmt::Display for FlowSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `type` field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    ApiKey,
    Http,
    OAuth2,
    OpenIdConnect,
    Other(String),
}

impl SchemeKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "apiKey" => SchemeKind::ApiKey,
            "http" => SchemeKind::Http,
            "oauth2" => SchemeKind::OAuth2,
            "openIdConnect" => SchemeKind::OpenIdConnect,
            other => SchemeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SchemeKind::ApiKey => "apiKey",
            SchemeKind::Http => "http",
            SchemeKind::OAuth2 => "oauth2",
            SchemeKind::OpenIdConnect => "openIdConnect",
            SchemeKind::Other(raw) => raw,
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `scheme` field for `http` schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpAuthScheme {
    Bearer,
    Basic,
}

impl HttpAuthScheme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "bearer" => Some(HttpAuthScheme::Bearer),
            "basic" => Some(HttpAuthScheme::Basic),
            _ => None,
        }
    }
}

/// Value of the `in` field for `apiKey` schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyLocation {
    Query,
    Header,
}

impl ApiKeyLocation {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "query" => Some(ApiKeyLocation::Query),
            "header" => Some(ApiKeyLocation::Header),
            _ => None,
        }
    }
}
