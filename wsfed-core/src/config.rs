//! Relying-party configuration.
//!
//! Loaded from JSON by the hosting application and used to seed
//! outbound messages and the token extractor.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_WRESULT_LENGTH;
use crate::errors::WsFedError;
use crate::federation::FederationMessage;
use crate::token::TokenExtractor;

/// Settings a relying party needs to talk to one identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelyingPartyConfig {
    /// Identity provider passive endpoint.
    pub issuer_address: String,
    /// `wtrealm` sent with every request.
    pub realm: String,
    /// `wreply`, when the identity provider should not use its configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    /// `whr` hint for multi-provider setups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_realm: Option<String>,
    /// `wfresh` in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshness: Option<u32>,
    /// Largest `wresult` accepted for token extraction (bytes).
    #[serde(default = "default_max_wresult_length")]
    pub max_wresult_length: usize,
}

fn default_max_wresult_length() -> usize {
    DEFAULT_MAX_WRESULT_LENGTH
}

impl RelyingPartyConfig {
    pub fn new(issuer_address: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            issuer_address: issuer_address.into(),
            realm: realm.into(),
            reply: None,
            home_realm: None,
            freshness: None,
            max_wresult_length: DEFAULT_MAX_WRESULT_LENGTH,
        }
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns `WsFedError::Configuration` on invalid JSON or failed validation.
    pub fn from_json(json: &str) -> Result<Self, WsFedError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| WsFedError::Configuration(format!("invalid relying party config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `WsFedError::Configuration` when the issuer address or realm
    /// is blank, or the extraction limit is zero.
    pub fn validate(&self) -> Result<(), WsFedError> {
        if self.issuer_address.trim().is_empty() {
            return Err(WsFedError::Configuration("issuer_address is empty".into()));
        }
        if self.realm.trim().is_empty() {
            return Err(WsFedError::Configuration("realm is empty".into()));
        }
        if self.max_wresult_length == 0 {
            return Err(WsFedError::Configuration(
                "max_wresult_length must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Message addressed to the identity provider carrying realm, reply,
    /// home realm and freshness. Call `create_sign_in_url` on the result.
    pub fn sign_in_message(&self) -> FederationMessage {
        let mut message = FederationMessage::with_issuer(self.issuer_address.as_str());
        message.set_wtrealm(self.realm.as_str());
        if let Some(reply) = &self.reply {
            message.set_wreply(reply.as_str());
        }
        if let Some(home_realm) = &self.home_realm {
            message.set_whr(home_realm.as_str());
        }
        if let Some(freshness) = self.freshness {
            message.set_wfresh(freshness.to_string());
        }
        message
    }

    /// Message for a sign-out request; carries realm and reply only.
    pub fn sign_out_message(&self) -> FederationMessage {
        let mut message = FederationMessage::with_issuer(self.issuer_address.as_str());
        message.set_wtrealm(self.realm.as_str());
        if let Some(reply) = &self.reply {
            message.set_wreply(reply.as_str());
        }
        message
    }

    pub fn token_extractor(&self) -> TokenExtractor {
        TokenExtractor::new(self.max_wresult_length)
    }
}
