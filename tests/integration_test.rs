use schemeguard::SchemeGuardError;
use schemeguard::commands::execute_validate;
use schemeguard::loader::load_document;
use schemeguard::models::{FlowSlot, SchemeEntry};
use schemeguard::validation::{DocumentValidator, Entity, ErrorKind};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

#[test]
fn test_load_openapi_fixture() {
    let path = Path::new("tests/fixtures/openapi.yaml");
    let result = load_document(path);

    assert!(result.is_ok(), "Failed to load OpenAPI fixture");

    let document = result.unwrap();
    assert_eq!(document.openapi, "3.0.3");
    assert_eq!(document.info.as_ref().unwrap().title, "User Management API");

    let schemes = document.security_schemes().unwrap();
    let names: Vec<&str> = schemes.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "csrfToken",
            "apiKeyQuery",
            "basicAuth",
            "bearerAuth",
            "companySso",
            "shared"
        ]
    );
    assert!(matches!(schemes["shared"], SchemeEntry::Reference { .. }));
}

#[test]
fn test_valid_fixture_accepted() {
    let document = load_document("tests/fixtures/openapi.yaml").unwrap();
    let cancel = CancellationToken::new();

    let result = DocumentValidator::new(&document, &cancel)
        .validate_all()
        .unwrap();

    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    assert_eq!(result.accepted.len(), 5);

    // The $ref entry is reported, not resolved
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].scheme_name.as_deref(), Some("shared"));
}

#[test]
fn test_invalid_fixture_errors() {
    let document = load_document("tests/fixtures/invalid_schemes.yaml").unwrap();
    let cancel = CancellationToken::new();

    let result = DocumentValidator::new(&document, &cancel)
        .validate_all()
        .unwrap();

    assert!(!result.is_valid);
    assert_eq!(result.accepted, vec!["validKey"]);

    let kinds: Vec<(&str, ErrorKind)> = result
        .errors
        .iter()
        .map(|e| (e.scheme_name.as_deref().unwrap(), e.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("mtls", ErrorKind::InvalidKind),
            ("oidc", ErrorKind::UnsupportedFeature),
            ("digest", ErrorKind::InvalidSchemeValue),
            ("paseto", ErrorKind::InvalidFieldValue),
            ("basicWithFormat", ErrorKind::UnexpectedField),
            ("keyWithoutLocation", ErrorKind::InvalidFieldValue),
            ("keyWithoutName", ErrorKind::MissingField),
            ("oauthNoFlows", ErrorKind::MissingFlow),
            ("implicitNoScopes", ErrorKind::MissingField),
            ("nullScopes", ErrorKind::MissingField),
        ]
    );

    let scopes_error = &result.errors[8];
    assert_eq!(scopes_error.entity, Entity::OAuthFlow);
    assert_eq!(scopes_error.flow_slot, Some(FlowSlot::Implicit));
    assert!(scopes_error.in_flow);
    assert_eq!(
        scopes_error.format(),
        "[scheme: implicitNoScopes] [flow: implicit] Security scheme 'flow' is invalid: An OAuth flow is missing 'scopes'"
    );
}

#[test]
fn test_null_scopes_rejects_only_that_scheme() {
    let document = load_document("tests/fixtures/invalid_schemes.yaml").unwrap();
    let cancel = CancellationToken::new();

    let result = DocumentValidator::new(&document, &cancel)
        .validate_all()
        .unwrap();

    let error = result
        .errors
        .iter()
        .find(|e| e.scheme_name.as_deref() == Some("nullScopes"))
        .unwrap();
    assert_eq!(error.kind, ErrorKind::MissingField);
    assert_eq!(error.field, Some("scopes"));
    assert_eq!(error.flow_slot, Some(FlowSlot::Password));
    assert!(result.accepted.iter().any(|name| name == "validKey"));
}

#[test]
fn test_validation_is_repeatable() {
    let document = load_document("tests/fixtures/invalid_schemes.yaml").unwrap();
    let cancel = CancellationToken::new();
    let validator = DocumentValidator::new(&document, &cancel);

    let first = validator.validate_all().unwrap();
    let second = validator.validate_all().unwrap();

    assert_eq!(first.errors, second.errors);
    assert_eq!(first.accepted, second.accepted);
}

#[test]
fn test_unknown_field_rejected_on_load() {
    let result = load_document("tests/fixtures/unknown_field.json");

    match result {
        Err(SchemeGuardError::UnknownField { entity, field }) => {
            assert_eq!(entity, "security scheme 'jwt'");
            assert_eq!(field, "tokenType");
        }
        other => panic!("expected unknown field error, got {:?}", other),
    }
}

#[test]
fn test_validate_command() {
    let cancel = CancellationToken::new();

    let valid = vec![PathBuf::from("tests/fixtures/openapi.yaml")];
    assert!(execute_validate(&valid, &cancel).unwrap());

    let mixed = vec![
        PathBuf::from("tests/fixtures/openapi.yaml"),
        PathBuf::from("tests/fixtures/invalid_schemes.yaml"),
    ];
    assert!(!execute_validate(&mixed, &cancel).unwrap());

    // Load failures are reported per file, not returned as errors
    let broken = vec![PathBuf::from("tests/fixtures/unknown_field.json")];
    assert!(!execute_validate(&broken, &cancel).unwrap());
}

#[test]
fn test_validate_command_cancelled() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let files = vec![PathBuf::from("tests/fixtures/openapi.yaml")];
    let result = execute_validate(&files, &cancel);
    assert!(matches!(result, Err(SchemeGuardError::Cancelled)));
}
