//! Conformance: Fault Code Tables
//!
//! WS-Trust fault codes are defined by WS-Security §12 and WS-Trust §11;
//! WS-Federation fault codes by WS-Federation 1.2 §15. Both tables are
//! closed sets.

use wsfed_core::fault_codes::{
    is_valid_fault_code, FaultCode, FederationFaultCode, WS_TRUST_FAULT_CODES,
};

#[test]
fn conformance_ws_trust_fault_codes_exact_list() {
    let expected: [&str; 8] = [
        "FailedAuthentication",
        "FailedCheck",
        "InvalidSecurity",
        "InvalidSecurityToken",
        "MessageExpired",
        "SecurityTokenUnavailable",
        "UnsupportedAlgorithm",
        "UnsupportedSecurityToken",
    ];
    assert_eq!(WS_TRUST_FAULT_CODES, expected);
}

#[test]
fn conformance_ws_trust_enum_covers_registry() {
    assert_eq!(FaultCode::ALL.len(), WS_TRUST_FAULT_CODES.len());
    for code in WS_TRUST_FAULT_CODES {
        let parsed: FaultCode = code.parse().expect("registry code must parse");
        assert_eq!(parsed.as_str(), code);
        assert!(is_valid_fault_code(code));
    }
}

#[test]
fn conformance_ws_trust_rejects_federation_faults() {
    for code in FederationFaultCode::ALL {
        assert!(!is_valid_fault_code(code.as_str()));
        assert_eq!(FaultCode::parse(code.as_str()), None);
    }
}

#[test]
fn conformance_federation_fault_codes_exact_list() {
    let names: Vec<&str> = FederationFaultCode::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "AlreadySignedIn",
            "BadRequest",
            "IssuerNameNotSupported",
            "NeedFresherCredentials",
            "NoMatchInScope",
            "NoPseudonymInScope",
            "NotSignedIn",
            "UnsupportedClaimsDialect",
            "UnsupportedEncoding",
        ]
    );
}
