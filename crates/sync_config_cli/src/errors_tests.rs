use super::*;

#[test]
fn test_project_not_found_display() {
    let error = Error::ProjectNotFound("ABC".to_string());

    assert_eq!(error.to_string(), "No configuration found for project 'ABC'");
}

#[test]
fn test_load_error_is_transparent() {
    let error: Error = ConfigurationError::ValidationFailed {
        message: "Inbound mapping - following items do not contain field declaration: %x%. "
            .to_string(),
    }
    .into();

    assert!(matches!(error, Error::Load(_)));
    assert!(error.to_string().starts_with("Configuration validation failed"));
}

#[test]
fn test_load_file_error_display() {
    let error = Error::LoadFile(io::Error::new(io::ErrorKind::NotFound, "missing.xml"));

    assert!(error.to_string().contains("missing.xml"));
}
