//! Error types for wsfed-core.
//!
//! A single enum covers every failing operation. Advisory conditions
//! (missing copy source, missing `wresult`, empty query string) are
//! logged and never surface here.
//!
//! Each variant carries a stable diagnostic code, returned by
//! [`WsFedError::code`] and listed in [`DIAGNOSTIC_CODES`].

/// Unified error type for all wsfed-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WsFedError {
    /// Message cannot be built with the current settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// `wresult` is not well-formed XML.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// `wresult` root is not a WS-Trust 2005 `RequestSecurityTokenResponse`.
    #[error("Unexpected root element: expected {expected}, found {found}")]
    UnexpectedRootElement { expected: String, found: String },

    /// No `RequestedSecurityToken` child in the response.
    #[error("Token not found: no RequestedSecurityToken element in response")]
    TokenNotFound,

    /// `wresult` exceeds the configured length limit.
    #[error("Message too large: {len} bytes exceeds limit of {max}")]
    MessageTooLarge { len: usize, max: usize },

    /// URI could not be parsed.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),
}

impl WsFedError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "WSFED_CONFIGURATION",
            Self::MalformedMessage(_) => "WSFED_MALFORMED_MESSAGE",
            Self::UnexpectedRootElement { .. } => "WSFED_UNEXPECTED_ROOT",
            Self::TokenNotFound => "WSFED_TOKEN_NOT_FOUND",
            Self::MessageTooLarge { .. } => "WSFED_MESSAGE_TOO_LARGE",
            Self::InvalidUri(_) => "WSFED_INVALID_URI",
        }
    }
}

// ── Diagnostic Code Registry ─────────────────────────────────────────

/// Canonical diagnostic code registry, one entry per [`WsFedError`] variant.
pub const DIAGNOSTIC_CODES: [&str; 6] = [
    "WSFED_CONFIGURATION",
    "WSFED_MALFORMED_MESSAGE",
    "WSFED_UNEXPECTED_ROOT",
    "WSFED_TOKEN_NOT_FOUND",
    "WSFED_MESSAGE_TOO_LARGE",
    "WSFED_INVALID_URI",
];

/// Returns `true` if the given string is a registered diagnostic code.
pub fn is_valid_diagnostic_code(code: &str) -> bool {
    DIAGNOSTIC_CODES.contains(&code)
}
