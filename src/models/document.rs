use super::security_scheme::SecurityScheme;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de};

/// The parts of an OpenAPI document that carry security schemes.
/// Everything else in the document is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version (e.g., "3.0.3")
    pub openapi: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

impl OpenApiDocument {
    /// Security schemes declared under `components.securitySchemes`
    pub fn security_schemes(&self) -> Option<&IndexMap<String, SchemeEntry>> {
        self.components.as_ref().map(|c| &c.security_schemes)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        default,
        rename = "securitySchemes",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub security_schemes: IndexMap<String, SchemeEntry>,
}

/// Entry in the `securitySchemes` map: either an inline scheme or a `$ref`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemeEntry {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Scheme(SecurityScheme),
}

impl<'de> Deserialize<'de> for SchemeEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;

        // `$ref` wins over any sibling keys
        if let Some(reference) = value.get("$ref") {
            let reference = reference
                .as_str()
                .ok_or_else(|| de::Error::custom("'$ref' must be a string"))?;
            return Ok(SchemeEntry::Reference {
                reference: reference.to_string(),
            });
        }

        // Deserialize the scheme directly so its own error is reported
        SecurityScheme::deserialize(value)
            .map(SchemeEntry::Scheme)
            .map_err(|e| de::Error::custom(format!("invalid security scheme: {}", e)))
    }
}

impl SchemeEntry {
    pub fn as_scheme(&self) -> Option<&SecurityScheme> {
        match self {
            SchemeEntry::Scheme(scheme) => Some(scheme),
            SchemeEntry::Reference { .. } => None,
        }
    }
}
