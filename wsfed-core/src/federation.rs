//! WS-Federation messages.
//!
//! [`FederationMessage`] composes a [`ProtocolMessage`] and adds typed
//! accessors for the fixed WS-Federation vocabulary. Each accessor pair
//! reads the first value of, or writes exactly one entry for, a single
//! parameter name.

use url::Url;

use crate::constants::{
    parameter, ACTION_ATTRIBUTE, ACTION_PSEUDONYM, ACTION_SIGN_IN, ACTION_SIGN_OUT,
    ACTION_SIGN_OUT_CLEANUP,
};
use crate::encoding;
use crate::errors::WsFedError;
use crate::message::ProtocolMessage;
use crate::parameters::ParameterBag;
use crate::token::TokenExtractor;

/// Typed view of the `wa` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FederationAction {
    SignIn,
    SignOut,
    SignOutCleanup,
    Attribute,
    Pseudonym,
    /// `wa` present with a value outside the WS-Federation vocabulary.
    Other,
}

impl FederationAction {
    pub fn from_wa(wa: &str) -> Self {
        match wa {
            ACTION_SIGN_IN => Self::SignIn,
            ACTION_SIGN_OUT => Self::SignOut,
            ACTION_SIGN_OUT_CLEANUP => Self::SignOutCleanup,
            ACTION_ATTRIBUTE => Self::Attribute,
            ACTION_PSEUDONYM => Self::Pseudonym,
            _ => Self::Other,
        }
    }

    /// The `wa` value, or `None` for [`FederationAction::Other`].
    pub fn as_wa(self) -> Option<&'static str> {
        match self {
            Self::SignIn => Some(ACTION_SIGN_IN),
            Self::SignOut => Some(ACTION_SIGN_OUT),
            Self::SignOutCleanup => Some(ACTION_SIGN_OUT_CLEANUP),
            Self::Attribute => Some(ACTION_ATTRIBUTE),
            Self::Pseudonym => Some(ACTION_PSEUDONYM),
            Self::Other => None,
        }
    }
}

/// A WS-Federation protocol message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FederationMessage {
    message: ProtocolMessage,
}

macro_rules! federation_parameters {
    ($( $(#[$doc:meta])* $name:ident, $setter:ident => $param:path; )*) => {
        impl FederationMessage {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Option<&str> {
                    self.message.get_parameter($param)
                }

                pub fn $setter(&mut self, value: impl Into<String>) {
                    self.message.replace_parameter($param, value);
                }
            )*
        }
    };
}

federation_parameters! {
    /// `wa`: requested action.
    wa, set_wa => parameter::WA;
    /// `wreply`: return URL.
    wreply, set_wreply => parameter::WREPLY;
    /// `wtrealm`: relying party realm.
    wtrealm, set_wtrealm => parameter::WTREALM;
    /// `wctx`: opaque context echoed by the identity provider.
    wctx, set_wctx => parameter::WCTX;
    /// `wresult`: issued response.
    wresult, set_wresult => parameter::WRESULT;
    /// `wfresh`: maximum authentication age in minutes.
    wfresh, set_wfresh => parameter::WFRESH;
    /// `whr`: home realm.
    whr, set_whr => parameter::WHR;
    wp, set_wp => parameter::WP;
    wauth, set_wauth => parameter::WAUTH;
    wattr, set_wattr => parameter::WATTR;
    wattrptr, set_wattrptr => parameter::WATTRPTR;
    wencoding, set_wencoding => parameter::WENCODING;
    wfed, set_wfed => parameter::WFED;
    wreq, set_wreq => parameter::WREQ;
    wreqptr, set_wreqptr => parameter::WREQPTR;
    wres, set_wres => parameter::WRES;
    wresultptr, set_wresultptr => parameter::WRESULTPTR;
    wpseudo, set_wpseudo => parameter::WPSEUDO;
    wpseudoptr, set_wpseudoptr => parameter::WPSEUDOPTR;
}

impl FederationMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issuer(issuer_address: impl Into<String>) -> Self {
        Self {
            message: ProtocolMessage::with_issuer(issuer_address),
        }
    }

    /// Deep copy of `source`; a missing source logs a warning and yields
    /// an empty message.
    pub fn copy_from(source: Option<&FederationMessage>) -> Self {
        Self {
            message: ProtocolMessage::copy_from(source.map(|m| &m.message)),
        }
    }

    /// Parse an inbound query string (`?` prefix optional).
    ///
    /// Names and values are percent-decoded. Each value of a repeated
    /// name becomes its own entry. Empty or whitespace-only input yields
    /// an empty message.
    pub fn from_query_string(query: &str) -> Self {
        let mut result = Self::new();
        if query.trim().is_empty() {
            tracing::warn!("empty query string; returning empty federation message");
            return result;
        }

        for (name, values) in encoding::parse_query(query) {
            for value in values {
                result.message.set_parameter(name.as_str(), value);
            }
        }
        result
    }

    /// Parse the query component of `uri`. The issuer address is not set.
    pub fn from_uri(uri: &Url) -> Self {
        match uri.query() {
            Some(query) if !query.is_empty() => Self::from_query_string(query),
            _ => {
                tracing::warn!(uri = %uri, "URI carries no query; returning empty federation message");
                Self::new()
            }
        }
    }

    /// Parse an absolute URI string, then behave as [`Self::from_uri`].
    ///
    /// # Errors
    /// Returns `WsFedError::InvalidUri` if `uri` is not an absolute URI.
    pub fn from_uri_str(uri: &str) -> Result<Self, WsFedError> {
        let parsed = Url::parse(uri).map_err(|e| WsFedError::InvalidUri(format!("{uri}: {e}")))?;
        Ok(Self::from_uri(&parsed))
    }

    pub fn message(&self) -> &ProtocolMessage {
        &self.message
    }

    pub fn message_mut(&mut self) -> &mut ProtocolMessage {
        &mut self.message
    }

    pub fn parameters(&self) -> &ParameterBag {
        self.message.parameters()
    }

    pub fn issuer_address(&self) -> &str {
        self.message.issuer_address()
    }

    pub fn set_issuer_address(&mut self, issuer_address: impl Into<String>) {
        self.message.set_issuer_address(issuer_address);
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.message.get_parameter(name)
    }

    /// Append a parameter; repeated names accumulate.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.message.set_parameter(name, value);
    }

    pub fn remove_parameter(&mut self, name: &str) -> bool {
        self.message.remove_parameter(name)
    }

    pub fn to_query_string(&self) -> String {
        self.message.to_query_string()
    }

    pub fn build_redirect_url(&self) -> Result<String, WsFedError> {
        self.message.build_redirect_url()
    }

    pub fn action(&self) -> Option<FederationAction> {
        self.wa().map(FederationAction::from_wa)
    }

    pub fn is_sign_in_message(&self) -> bool {
        self.wa() == Some(ACTION_SIGN_IN)
    }

    pub fn is_sign_out_message(&self) -> bool {
        self.wa() == Some(ACTION_SIGN_OUT)
    }

    pub fn is_sign_out_cleanup_message(&self) -> bool {
        self.wa() == Some(ACTION_SIGN_OUT_CLEANUP)
    }

    /// Redirect URL for a `wsignin1.0` request built from a copy of this
    /// message. `self` is not modified.
    ///
    /// # Errors
    /// Returns `WsFedError::Configuration` if the issuer address is empty.
    pub fn create_sign_in_url(&self) -> Result<String, WsFedError> {
        self.create_action_url(ACTION_SIGN_IN)
    }

    /// Redirect URL for a `wsignout1.0` request. `self` is not modified.
    pub fn create_sign_out_url(&self) -> Result<String, WsFedError> {
        self.create_action_url(ACTION_SIGN_OUT)
    }

    /// Redirect URL for a `wsignoutcleanup1.0` request. `self` is not modified.
    pub fn create_sign_out_cleanup_url(&self) -> Result<String, WsFedError> {
        self.create_action_url(ACTION_SIGN_OUT_CLEANUP)
    }

    // The action is emitted first; remaining parameters keep their order.
    fn create_action_url(&self, action: &str) -> Result<String, WsFedError> {
        let mut copy = Self::copy_from(Some(self));
        let rest = std::mem::take(copy.message.parameters_mut());
        let parameters = copy.message.parameters_mut();
        parameters.set(parameter::WA, action);
        for p in rest.into_iter().filter(|p| p.name != parameter::WA) {
            parameters.set(p.name, p.value);
        }
        copy.message.build_redirect_url()
    }

    /// Security token carried in `wresult`, using default extraction limits.
    ///
    /// Returns `Ok(None)` (and logs a warning) when `wresult` is absent.
    ///
    /// # Errors
    /// Propagates [`TokenExtractor::extract`] failures.
    pub fn get_token(&self) -> Result<Option<String>, WsFedError> {
        self.get_token_with(&TokenExtractor::default())
    }

    /// As [`Self::get_token`], with an explicitly configured extractor.
    pub fn get_token_with(&self, extractor: &TokenExtractor) -> Result<Option<String>, WsFedError> {
        match self.wresult() {
            Some(wresult) => extractor.extract(wresult).map(Some),
            None => {
                tracing::warn!("wresult is absent; no token to extract");
                Ok(None)
            }
        }
    }
}

impl From<ProtocolMessage> for FederationMessage {
    fn from(message: ProtocolMessage) -> Self {
        Self { message }
    }
}
