//! Protocol constants — WS-Federation parameter vocabulary and WS-Trust names.
//!
//! Every value here is fixed by the WS-Federation 1.2 and WS-Trust
//! specifications. Nothing in this module is mutable at runtime.

// ── WS-Federation parameter names ───────────────────────────────────

/// Query parameter names defined by WS-Federation (§13.2).
pub mod parameter {
    /// Action (`wsignin1.0`, `wsignout1.0`, ...).
    pub const WA: &str = "wa";
    /// URL the identity provider returns the caller to.
    pub const WREPLY: &str = "wreply";
    /// Realm (security domain) of the relying party.
    pub const WTREALM: &str = "wtrealm";
    /// Opaque context echoed back by the identity provider.
    pub const WCTX: &str = "wctx";
    /// Issued result, usually a `RequestSecurityTokenResponse`.
    pub const WRESULT: &str = "wresult";
    /// Maximum age of authentication, in minutes.
    pub const WFRESH: &str = "wfresh";
    /// Home realm of the requestor.
    pub const WHR: &str = "whr";
    /// Policy URL.
    pub const WP: &str = "wp";
    /// Required authentication level.
    pub const WAUTH: &str = "wauth";
    /// Attribute request.
    pub const WATTR: &str = "wattr";
    /// URL of an attribute request.
    pub const WATTRPTR: &str = "wattrptr";
    /// Encoding style of the result.
    pub const WENCODING: &str = "wencoding";
    /// Federation identifier.
    pub const WFED: &str = "wfed";
    /// Token issuance request.
    pub const WREQ: &str = "wreq";
    /// URL of a token issuance request.
    pub const WREQPTR: &str = "wreqptr";
    /// Resource.
    pub const WRES: &str = "wres";
    /// URL of the issued result.
    pub const WRESULTPTR: &str = "wresultptr";
    /// Pseudonym request.
    pub const WPSEUDO: &str = "wpseudo";
    /// URL of a pseudonym request.
    pub const WPSEUDOPTR: &str = "wpseudoptr";
}

/// All WS-Federation parameter names, in specification order.
pub const PARAMETER_NAMES: [&str; 19] = [
    parameter::WA,
    parameter::WREPLY,
    parameter::WTREALM,
    parameter::WCTX,
    parameter::WRESULT,
    parameter::WFRESH,
    parameter::WHR,
    parameter::WP,
    parameter::WAUTH,
    parameter::WATTR,
    parameter::WATTRPTR,
    parameter::WENCODING,
    parameter::WFED,
    parameter::WREQ,
    parameter::WREQPTR,
    parameter::WRES,
    parameter::WRESULTPTR,
    parameter::WPSEUDO,
    parameter::WPSEUDOPTR,
];

// ── WS-Federation actions (`wa` values) ─────────────────────────────

/// Sign-in request / response.
pub const ACTION_SIGN_IN: &str = "wsignin1.0";

/// Sign-out request.
pub const ACTION_SIGN_OUT: &str = "wsignout1.0";

/// Sign-out cleanup, sent by the identity provider to each relying party.
pub const ACTION_SIGN_OUT_CLEANUP: &str = "wsignoutcleanup1.0";

/// Attribute request.
pub const ACTION_ATTRIBUTE: &str = "wattr1.0";

/// Pseudonym request.
pub const ACTION_PSEUDONYM: &str = "wpseudo1.0";

// ── WS-Trust XML vocabulary ─────────────────────────────────────────

/// WS-Trust February 2005 namespace.
pub const WS_TRUST_2005_NAMESPACE: &str = "http://schemas.xmlsoap.org/ws/2005/02/trust";

/// WS-Trust 1.3 namespace.
pub const WS_TRUST_13_NAMESPACE: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512";

/// WS-Trust 1.4 namespace.
pub const WS_TRUST_14_NAMESPACE: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200802";

/// Root element of an issued `wresult`.
pub const REQUEST_SECURITY_TOKEN_RESPONSE: &str = "RequestSecurityTokenResponse";

/// Element wrapping the issued token.
pub const REQUESTED_SECURITY_TOKEN: &str = "RequestedSecurityToken";

/// WS-Trust specification versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WsTrustVersion {
    /// February 2005 submission (`t:` prefix in most deployments).
    Feb2005,
    /// OASIS WS-Trust 1.3.
    V13,
    /// OASIS WS-Trust 1.4.
    V14,
}

impl WsTrustVersion {
    /// Every known version, oldest first.
    pub const ALL: [WsTrustVersion; 3] = [Self::Feb2005, Self::V13, Self::V14];

    /// Namespace URI for this version.
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Feb2005 => WS_TRUST_2005_NAMESPACE,
            Self::V13 => WS_TRUST_13_NAMESPACE,
            Self::V14 => WS_TRUST_14_NAMESPACE,
        }
    }

    /// Reverse lookup from a namespace URI (exact match).
    pub fn from_namespace(namespace: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.namespace() == namespace)
    }
}

// ── Limits ──────────────────────────────────────────────────────────

/// Default upper bound on `wresult` length accepted for extraction (bytes).
pub const DEFAULT_MAX_WRESULT_LENGTH: usize = 2 * 1024 * 1024;
