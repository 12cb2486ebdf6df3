//! Fault code tables — WS-Trust and WS-Federation fault vocabularies.
//!
//! Reference-only: nothing in this crate raises these faults. They are
//! exposed so callers classifying identity provider errors can match
//! against a closed set.

use std::fmt;
use std::str::FromStr;

/// WS-Trust fault codes (WS-Security §12 / WS-Trust §11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultCode {
    FailedAuthentication,
    FailedCheck,
    InvalidSecurity,
    InvalidSecurityToken,
    MessageExpired,
    SecurityTokenUnavailable,
    UnsupportedAlgorithm,
    UnsupportedSecurityToken,
}

/// Canonical WS-Trust fault code strings, in [`FaultCode::ALL`] order.
pub const WS_TRUST_FAULT_CODES: [&str; 8] = [
    "FailedAuthentication",
    "FailedCheck",
    "InvalidSecurity",
    "InvalidSecurityToken",
    "MessageExpired",
    "SecurityTokenUnavailable",
    "UnsupportedAlgorithm",
    "UnsupportedSecurityToken",
];

impl FaultCode {
    pub const ALL: [FaultCode; 8] = [
        Self::FailedAuthentication,
        Self::FailedCheck,
        Self::InvalidSecurity,
        Self::InvalidSecurityToken,
        Self::MessageExpired,
        Self::SecurityTokenUnavailable,
        Self::UnsupportedAlgorithm,
        Self::UnsupportedSecurityToken,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailedAuthentication => "FailedAuthentication",
            Self::FailedCheck => "FailedCheck",
            Self::InvalidSecurity => "InvalidSecurity",
            Self::InvalidSecurityToken => "InvalidSecurityToken",
            Self::MessageExpired => "MessageExpired",
            Self::SecurityTokenUnavailable => "SecurityTokenUnavailable",
            Self::UnsupportedAlgorithm => "UnsupportedAlgorithm",
            Self::UnsupportedSecurityToken => "UnsupportedSecurityToken",
        }
    }

    /// Case-sensitive lookup.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for [`FromStr`] on the fault code enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fault code: {0}")]
pub struct UnknownFaultCode(pub String);

impl FromStr for FaultCode {
    type Err = UnknownFaultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFaultCode(s.to_string()))
    }
}

/// Returns `true` if the given string is a WS-Trust fault code.
pub fn is_valid_fault_code(code: &str) -> bool {
    WS_TRUST_FAULT_CODES.contains(&code)
}

// ── WS-Federation faults (WS-Federation 1.2 §15) ─────────────────────

/// WS-Federation specific fault codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederationFaultCode {
    AlreadySignedIn,
    BadRequest,
    IssuerNameNotSupported,
    NeedFresherCredentials,
    NoMatchInScope,
    NoPseudonymInScope,
    NotSignedIn,
    UnsupportedClaimsDialect,
    UnsupportedEncoding,
}

impl FederationFaultCode {
    pub const ALL: [FederationFaultCode; 9] = [
        Self::AlreadySignedIn,
        Self::BadRequest,
        Self::IssuerNameNotSupported,
        Self::NeedFresherCredentials,
        Self::NoMatchInScope,
        Self::NoPseudonymInScope,
        Self::NotSignedIn,
        Self::UnsupportedClaimsDialect,
        Self::UnsupportedEncoding,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlreadySignedIn => "AlreadySignedIn",
            Self::BadRequest => "BadRequest",
            Self::IssuerNameNotSupported => "IssuerNameNotSupported",
            Self::NeedFresherCredentials => "NeedFresherCredentials",
            Self::NoMatchInScope => "NoMatchInScope",
            Self::NoPseudonymInScope => "NoPseudonymInScope",
            Self::NotSignedIn => "NotSignedIn",
            Self::UnsupportedClaimsDialect => "UnsupportedClaimsDialect",
            Self::UnsupportedEncoding => "UnsupportedEncoding",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for FederationFaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FederationFaultCode {
    type Err = UnknownFaultCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFaultCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_and_registry_agree() {
        for (code, s) in FaultCode::ALL.iter().zip(WS_TRUST_FAULT_CODES) {
            assert_eq!(code.as_str(), s);
            assert_eq!(code.to_string(), s);
            assert!(is_valid_fault_code(s));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(FaultCode::parse("MessageExpired"), Some(FaultCode::MessageExpired));
        assert_eq!(FaultCode::parse("messageexpired"), None);
        assert!("FailedCheck".parse::<FaultCode>().is_ok());
        let err = "Nope".parse::<FaultCode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown fault code: Nope");
    }

    #[test]
    fn federation_faults_round_trip_through_parse() {
        for code in FederationFaultCode::ALL {
            assert_eq!(FederationFaultCode::parse(code.as_str()), Some(code));
        }
        assert_eq!(FederationFaultCode::parse("FailedCheck"), None);
    }
}
