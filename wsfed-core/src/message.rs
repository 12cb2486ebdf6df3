//! Generic protocol message — a parameter bag plus an issuer address.
//!
//! Protocol families compose this type rather than extending it; see
//! [`crate::federation::FederationMessage`].

use crate::encoding;
use crate::errors::WsFedError;
use crate::parameters::ParameterBag;

/// Parameter bag addressed to an issuer endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolMessage {
    issuer_address: String,
    parameters: ParameterBag,
}

impl ProtocolMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issuer(issuer_address: impl Into<String>) -> Self {
        Self {
            issuer_address: issuer_address.into(),
            parameters: ParameterBag::new(),
        }
    }

    /// Deep copy of `source`.
    ///
    /// A missing source is tolerated: a warning is logged and an empty
    /// message is returned.
    pub fn copy_from(source: Option<&ProtocolMessage>) -> Self {
        match source {
            Some(message) => message.clone(),
            None => {
                tracing::warn!("protocol message copy requested without a source; starting empty");
                Self::new()
            }
        }
    }

    pub fn issuer_address(&self) -> &str {
        &self.issuer_address
    }

    pub fn set_issuer_address(&mut self, issuer_address: impl Into<String>) {
        self.issuer_address = issuer_address.into();
    }

    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterBag {
        &mut self.parameters
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// Append a parameter (see [`ParameterBag::set`]).
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.set(name, value);
    }

    /// Make `name` hold exactly `value` (see [`ParameterBag::replace`]).
    pub fn replace_parameter(&mut self, name: &str, value: impl Into<String>) {
        self.parameters.replace(name, value);
    }

    pub fn remove_parameter(&mut self, name: &str) -> bool {
        self.parameters.remove(name)
    }

    /// URL-encoded `name=value&...` rendering of every parameter.
    pub fn to_query_string(&self) -> String {
        encoding::encode_pairs(self.parameters.all())
    }

    /// `issuer_address?name=value&...`, parameters in insertion order.
    ///
    /// # Errors
    /// Returns `WsFedError::Configuration` if the issuer address is empty.
    pub fn build_redirect_url(&self) -> Result<String, WsFedError> {
        if self.issuer_address.trim().is_empty() {
            return Err(WsFedError::Configuration(
                "issuer address is required to build a redirect URL".into(),
            ));
        }
        if self.parameters.is_empty() {
            return Ok(self.issuer_address.clone());
        }
        Ok(format!("{}?{}", self.issuer_address, self.to_query_string()))
    }
}
