//! WS-Federation Core — protocol message model and token extraction.
//!
//! This crate models the messages a relying party exchanges with a
//! WS-Federation identity provider: it builds sign-in / sign-out
//! redirect URLs, parses inbound query strings, and pulls the issued
//! security token out of the WS-Trust response carried in `wresult`.
//!
//! Token validation, signature checks and HTTP transport belong to the
//! caller.
//!
//! # Module Map
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`constants`] | Parameter names, actions, WS-Trust namespaces |
//! | [`errors`] | `WsFedError` + diagnostic code registry |
//! | [`fault_codes`] | WS-Trust / WS-Federation fault vocabularies |
//! | [`encoding`] | URL encoding and query parsing |
//! | [`parameters`] | Ordered multi-valued parameter bag |
//! | [`message`] | Generic protocol message + redirect URL |
//! | [`federation`] | WS-Federation message and actions |
//! | [`token`] | Streaming `RequestedSecurityToken` extraction |
//! | [`config`] | Relying-party configuration |
//!
//! # Example
//!
//! ```
//! use wsfed_core::federation::FederationMessage;
//!
//! let mut message = FederationMessage::with_issuer("https://idp.example/issue");
//! message.set_wtrealm("urn:test");
//! assert_eq!(
//!     message.create_sign_in_url().unwrap(),
//!     "https://idp.example/issue?wa=wsignin1.0&wtrealm=urn%3atest"
//! );
//! ```

/// Protocol constants — WS-Federation and WS-Trust vocabulary.
pub mod constants;

/// Error types for wsfed-core operations.
pub mod errors;

/// WS-Trust and WS-Federation fault code tables.
pub mod fault_codes;

/// URL encoding and query string parsing.
pub mod encoding;

/// Ordered parameter bag.
pub mod parameters;

/// Protocol message base: issuer address + parameters.
pub mod message;

/// WS-Federation message.
pub mod federation;

/// Embedded token extraction from `wresult`.
pub mod token;

/// Relying-party configuration.
pub mod config;

pub use config::RelyingPartyConfig;
pub use errors::WsFedError;
pub use federation::{FederationAction, FederationMessage};
pub use message::ProtocolMessage;
pub use parameters::{Parameter, ParameterBag};
pub use token::{extract_requested_token, TokenExtractor};
