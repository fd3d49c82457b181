//! Tests for configuration error types.

use super::*;

/// Verify parse errors render their reason.
#[test]
fn test_parse_error_display() {
    let error = ConfigurationError::ParseError {
        reason: "unexpected end of stream".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Failed to parse configuration: unexpected end of stream"
    );
}

/// Verify validation failures carry the aggregated message verbatim.
#[test]
fn test_validation_failed_keeps_message() {
    let error = ConfigurationError::ValidationFailed {
        message: "Inbound mapping - following items do not contain field declaration: %x%. "
            .to_string(),
    };

    match &error {
        ConfigurationError::ValidationFailed { message } => {
            assert!(message.starts_with("Inbound mapping"));
            assert!(message.contains("%x%"));
        }
        _ => panic!("Expected ValidationFailed"),
    }
    assert!(error.to_string().contains("%x%"));
}

/// Verify roxmltree errors convert into parse errors.
#[test]
fn test_from_xml_error() {
    let Err(xml_error) = roxmltree::Document::parse("<configurations>") else {
        panic!("Expected malformed XML to fail");
    };
    let error: ConfigurationError = xml_error.into();

    assert!(matches!(error, ConfigurationError::ParseError { .. }));
}
