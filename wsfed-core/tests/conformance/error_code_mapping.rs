//! Conformance: Operation → Error Variant Mapping
//!
//! Each failing public operation must surface the documented
//! `WsFedError` variant and diagnostic code. Advisory conditions must
//! not surface as errors at all.

use wsfed_core::{FederationMessage, ProtocolMessage, RelyingPartyConfig, WsFedError};

const NS: &str = "http://schemas.xmlsoap.org/ws/2005/02/trust";

/// Display format is stable: "{Category}: {detail}".
#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(WsFedError, &str)> = vec![
        (
            WsFedError::Configuration("issuer address is empty".into()),
            "Configuration error: issuer address is empty",
        ),
        (
            WsFedError::MalformedMessage("unexpected end of document".into()),
            "Malformed message: unexpected end of document",
        ),
        (
            WsFedError::UnexpectedRootElement {
                expected: "{a}B".into(),
                found: "{c}D".into(),
            },
            "Unexpected root element: expected {a}B, found {c}D",
        ),
        (
            WsFedError::TokenNotFound,
            "Token not found: no RequestedSecurityToken element in response",
        ),
        (
            WsFedError::InvalidUri("x".into()),
            "Invalid URI: x",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "WsFedError display drift detected");
    }
}

/// WsFedError MUST implement std::error::Error.
#[test]
fn conformance_error_is_std_error() {
    let err = WsFedError::TokenNotFound;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn conformance_missing_issuer_maps_to_configuration() {
    let err = FederationMessage::new().create_sign_out_url().unwrap_err();
    assert_eq!(err.code(), "WSFED_CONFIGURATION");

    let err = ProtocolMessage::new().build_redirect_url().unwrap_err();
    assert_eq!(err.code(), "WSFED_CONFIGURATION");
}

#[test]
fn conformance_invalid_config_maps_to_configuration() {
    let err = RelyingPartyConfig::from_json(r#"{"realm":"urn:test"}"#).unwrap_err();
    assert_eq!(err.code(), "WSFED_CONFIGURATION");
}

#[test]
fn conformance_malformed_wresult_maps_to_malformed() {
    let mut message = FederationMessage::new();
    message.set_wresult("<t:Response>");
    assert_eq!(message.get_token().unwrap_err().code(), "WSFED_MALFORMED_MESSAGE");
}

#[test]
fn conformance_wrong_root_maps_to_unexpected_root() {
    let mut message = FederationMessage::new();
    message.set_wresult(format!("<t:Other xmlns:t='{NS}'/>"));
    assert_eq!(message.get_token().unwrap_err().code(), "WSFED_UNEXPECTED_ROOT");
}

#[test]
fn conformance_missing_token_maps_to_not_found() {
    let mut message = FederationMessage::new();
    message.set_wresult(format!(
        "<t:RequestSecurityTokenResponse xmlns:t='{NS}'><t:TokenType>x</t:TokenType></t:RequestSecurityTokenResponse>"
    ));
    assert_eq!(message.get_token().unwrap_err(), WsFedError::TokenNotFound);
}

#[test]
fn conformance_advisory_conditions_do_not_fail() {
    assert_eq!(FederationMessage::new().get_token(), Ok(None));
    assert!(FederationMessage::from_query_string("   ").parameters().is_empty());
    assert_eq!(FederationMessage::copy_from(None), FederationMessage::new());
}
