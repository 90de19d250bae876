use crate::error::{Result, SchemeGuardError};
use crate::models::{OpenApiDocument, SchemeEntry};
use std::fs;
use std::path::Path;

/// Load an OpenAPI document (YAML or JSON) from a file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<OpenApiDocument> {
    let path = path.as_ref();

    // Read the file
    let content = fs::read_to_string(path).map_err(|e| {
        SchemeGuardError::OpenApiLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "Loaded OpenAPI document");
    load_document_str(&content)
}

/// Parse an OpenAPI document from a string.
/// JSON is accepted as well since it is a subset of YAML.
pub fn load_document_str(content: &str) -> Result<OpenApiDocument> {
    // Parse YAML (or JSON)
    let document: OpenApiDocument = serde_yaml::from_str(content).map_err(|e| {
        SchemeGuardError::OpenApiLoadError(format!("Failed to parse OpenAPI document: {}", e))
    })?;

    // Basic validation
    check_version(&document)?;
    check_unknown_fields(&document)?;

    Ok(document)
}

fn check_version(document: &OpenApiDocument) -> Result<()> {
    if !document.openapi.starts_with("3.0") && !document.openapi.starts_with("3.1") {
        return Err(SchemeGuardError::UnsupportedVersion(
            document.openapi.clone(),
        ));
    }
    Ok(())
}

/// Reject keys that are neither known fields nor `x-` extensions
fn check_unknown_fields(document: &OpenApiDocument) -> Result<()> {
    let Some(schemes) = document.security_schemes() else {
        return Ok(());
    };

    for (name, entry) in schemes {
        // References are never resolved, so there is nothing to check
        let SchemeEntry::Scheme(scheme) = entry else {
            continue;
        };

        let entity = format!("security scheme '{}'", name);
        reject(&entity, scheme.unknown_fields())?;

        // Flows object, then every populated slot
        if let Some(flows) = &scheme.flows {
            reject(&format!("{} flows", entity), flows.unknown_fields())?;
            for (slot, flow) in flows.slots() {
                reject(&format!("{} flow '{}'", entity, slot), flow.unknown_fields())?;
            }
        }
    }

    Ok(())
}

fn reject(entity: &str, unknown: Vec<&str>) -> Result<()> {
    match unknown.first() {
        Some(field) => Err(SchemeGuardError::UnknownField {
            entity: entity.to_string(),
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_document() {
        let yaml = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths: {}
components:
  securitySchemes:
    csrf:
      type: apiKey
      in: header
      name: X-XSRF-TOKEN
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc.openapi, "3.0.0");
        assert_eq!(doc.info.as_ref().unwrap().title, "Test API");
        assert_eq!(doc.security_schemes().unwrap().len(), 1);
    }

    #[test]
    fn test_load_json_document() {
        let json = r#"{
  "openapi": "3.1.0",
  "components": {
    "securitySchemes": {
      "jwt": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
    }
  }
}"#;

        let doc = load_document_str(json).unwrap();
        let schemes = doc.security_schemes().unwrap();
        let jwt = schemes["jwt"].as_scheme().unwrap();
        assert_eq!(jwt.bearer_format, "JWT");
    }

    #[test]
    fn test_load_invalid_version() {
        let result = load_document_str("openapi: 2.0.0\n");
        assert!(matches!(result, Err(SchemeGuardError::UnsupportedVersion(v)) if v == "2.0.0"));
    }

    #[test]
    fn test_invalid_values_survive_loading() {
        let yaml = r#"
openapi: 3.0.0
components:
  securitySchemes:
    weird:
      type: mutualTLS
      scheme: digest
"#;
        let doc = load_document_str(yaml).unwrap();
        let scheme = doc.security_schemes().unwrap()["weird"].as_scheme().unwrap();
        assert_eq!(scheme.kind, "mutualTLS");
    }

    #[test]
    fn test_unknown_scheme_field_rejected() {
        let yaml = r#"
openapi: 3.0.0
components:
  securitySchemes:
    csrf:
      type: apiKey
      in: header
      name: X-XSRF-TOKEN
      location: header
"#;
        let err = load_document_str(yaml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown field 'location' in security scheme 'csrf'"
        );
    }

    #[test]
    fn test_unknown_flow_field_rejected() {
        let yaml = r#"
openapi: 3.0.0
components:
  securitySchemes:
    sso:
      type: oauth2
      flow:
        implicit:
          authorizationUrl: /authorize
          tokenUrl: /token
          scopes: {}
          audience: api
"#;
        let err = load_document_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            SchemeGuardError::UnknownField { ref field, .. } if field == "audience"
        ));
    }

    #[test]
    fn test_null_scopes_loads() {
        let yaml = r#"
openapi: 3.0.0
components:
  securitySchemes:
    key:
      type: apiKey
      in: header
      name: X-Token
      description:
    sso:
      type: oauth2
      flow:
        implicit:
          authorizationUrl: /authorize
          tokenUrl: /token
          scopes:
"#;
        let doc = load_document_str(yaml).unwrap();
        let schemes = doc.security_schemes().unwrap();
        assert_eq!(schemes.len(), 2);

        let sso = schemes["sso"].as_scheme().unwrap();
        let implicit = sso.flows.as_ref().unwrap().implicit.as_ref().unwrap();
        assert!(implicit.scopes.is_empty());
    }

    #[test]
    fn test_invalid_scheme_error_names_cause() {
        let yaml = r#"
openapi: 3.0.0
components:
  securitySchemes:
    key:
      type: apiKey
      name: [X-Token]
"#;
        let err = load_document_str(yaml).unwrap_err();
        assert!(err.to_string().contains("invalid security scheme"), "{err}");
    }

    #[test]
    fn test_extensions_allowed() {
        let yaml = r#"
openapi: 3.0.0
components:
  securitySchemes:
    sso:
      type: oauth2
      x-provider: keycloak
      flow:
        x-note: test
        implicit:
          authorizationUrl: /authorize
          tokenUrl: /token
          scopes:
            read: Read
          x-client-id: abc
"#;
        assert!(load_document_str(yaml).is_ok());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_document("/nonexistent/file.yaml");
        assert!(matches!(result, Err(SchemeGuardError::OpenApiLoadError(_))));
    }
}
