//! Conformance: Token Extraction Golden Vectors
//!
//! Every case in `tests/vectors/wresult.vectors.json` either yields the
//! exact expected inner markup or fails with the expected diagnostic
//! code. Cases run through `FederationMessage::get_token` so the
//! `wresult` plumbing is exercised too.

use serde::Deserialize;
use std::path::PathBuf;

use wsfed_core::FederationMessage;

#[derive(Deserialize)]
struct WresultVectors {
    #[allow(dead_code)]
    description: String,
    cases: Vec<WresultCase>,
}

#[derive(Deserialize)]
struct WresultCase {
    name: String,
    wresult: String,
    #[serde(default)]
    expected_token: Option<String>,
    #[serde(default)]
    expected_error: Option<String>,
}

fn load_vectors() -> WresultVectors {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
        .join("wresult.vectors.json");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("wresult vectors parse failed")
}

#[test]
fn conformance_wresult_vectors() {
    let vectors = load_vectors();
    assert!(!vectors.cases.is_empty());

    for case in &vectors.cases {
        let mut message = FederationMessage::new();
        message.set_wresult(case.wresult.as_str());
        let result = message.get_token();

        match (&case.expected_token, &case.expected_error) {
            (Some(token), None) => {
                let actual = result
                    .unwrap_or_else(|e| panic!("{}: unexpected error {e}", case.name))
                    .unwrap_or_else(|| panic!("{}: no token returned", case.name));
                assert_eq!(&actual, token, "{}: token drift", case.name);
            }
            (None, Some(code)) => {
                let err = result.expect_err(&format!("{}: expected {code}", case.name));
                assert_eq!(err.code(), code, "{}: wrong error {err}", case.name);
            }
            _ => panic!("{}: vector must set exactly one expectation", case.name),
        }
    }
}

/// Every non-error vector's token survives a second extraction when
/// re-wrapped, i.e. the output is a well-formed fragment.
#[test]
fn conformance_extracted_tokens_rewrap_cleanly() {
    const OPEN: &str = "<t:RequestSecurityTokenResponse xmlns:t='http://schemas.xmlsoap.org/ws/2005/02/trust' \
                        xmlns:saml='urn:oasis:names:tc:SAML:1.0:assertion'><t:RequestedSecurityToken>";
    const CLOSE: &str = "</t:RequestedSecurityToken></t:RequestSecurityTokenResponse>";

    for case in load_vectors().cases {
        let Some(expected) = case.expected_token else {
            continue;
        };
        let rewrapped = format!("{OPEN}{expected}{CLOSE}");
        let again = wsfed_core::extract_requested_token(&rewrapped)
            .unwrap_or_else(|e| panic!("{}: rewrap failed: {e}", case.name));
        assert_eq!(again, expected, "{}", case.name);
    }
}
