//! Conformance: Diagnostic Code Registry
//!
//! Asserts the canonical registry exists and keeps its exact list and
//! order. Callers persist and alert on these strings, so drift is a
//! breaking change.

use wsfed_core::errors::{is_valid_diagnostic_code, DIAGNOSTIC_CODES};

/// Exact list and order.
#[test]
fn conformance_diagnostic_registry_exact_list() {
    let expected: [&str; 6] = [
        "WSFED_CONFIGURATION",
        "WSFED_MALFORMED_MESSAGE",
        "WSFED_UNEXPECTED_ROOT",
        "WSFED_TOKEN_NOT_FOUND",
        "WSFED_MESSAGE_TOO_LARGE",
        "WSFED_INVALID_URI",
    ];

    assert_eq!(
        DIAGNOSTIC_CODES, expected,
        "DIAGNOSTIC_CODES drift from published list"
    );
}

/// All codes must be unique.
#[test]
fn conformance_diagnostic_registry_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in &DIAGNOSTIC_CODES {
        assert!(seen.insert(code), "duplicate diagnostic code: {code}");
    }
}

/// Validator accepts every registered code.
#[test]
fn conformance_diagnostic_validator_accepts_all() {
    for code in &DIAGNOSTIC_CODES {
        assert!(
            is_valid_diagnostic_code(code),
            "validator rejected canonical code: {code}"
        );
    }
}

/// Validator rejects unknown codes.
#[test]
fn conformance_diagnostic_validator_rejects_unknown() {
    assert!(!is_valid_diagnostic_code("NOT_A_REAL_CODE"));
    assert!(!is_valid_diagnostic_code(""));
    assert!(!is_valid_diagnostic_code("wsfed_configuration")); // case-sensitive
}
