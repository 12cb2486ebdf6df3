//! Embedded token extraction from a WS-Trust `wresult`.
//!
//! The response is walked once, forward only, as a pull-based state
//! machine over `quick_xml` events:
//!
//! ```text
//! Prolog ──root──▶ Scanning ──token start──▶ Buffering ──token end──▶ Scanning
//!                     │  ▲
//!                     │  └──────── subtree end ◀── Skipping ◀── other child
//!                     └──root end──▶ Done (token or TokenNotFound)
//! ```
//!
//! Skipped subtrees are only depth-counted. The matched subtree is
//! re-serialized into its own buffer, with the root's namespace
//! declarations copied onto it, so the buffer is a standalone document.
//! That buffer is re-parsed before its inner markup is returned.
//!
//! Only the WS-Trust February 2005 namespace is matched, for both the
//! root and the token element. When several `RequestedSecurityToken`
//! children are present the last one is returned.

use std::borrow::Cow;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use quick_xml::{NsReader, Writer};

use crate::constants::{
    DEFAULT_MAX_WRESULT_LENGTH, REQUESTED_SECURITY_TOKEN, REQUEST_SECURITY_TOKEN_RESPONSE,
    WS_TRUST_2005_NAMESPACE,
};
use crate::errors::WsFedError;

/// Extracts the `RequestedSecurityToken` payload from a `wresult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenExtractor {
    max_wresult_length: usize,
}

impl Default for TokenExtractor {
    fn default() -> Self {
        Self {
            max_wresult_length: DEFAULT_MAX_WRESULT_LENGTH,
        }
    }
}

enum State {
    Prolog,
    Scanning,
    Skipping {
        depth: usize,
    },
    Buffering {
        depth: usize,
        writer: Writer<Vec<u8>>,
        inner_start: usize,
    },
    /// Root closed; only whitespace, comments and PIs may follow.
    Done,
}

impl TokenExtractor {
    pub fn new(max_wresult_length: usize) -> Self {
        Self { max_wresult_length }
    }

    pub fn max_wresult_length(&self) -> usize {
        self.max_wresult_length
    }

    /// Inner markup of the `RequestedSecurityToken` element in `wresult`.
    ///
    /// # Errors
    /// - `MessageTooLarge` if `wresult` exceeds the configured limit.
    /// - `MalformedMessage` if `wresult` is not well-formed XML.
    /// - `UnexpectedRootElement` if the root is not a WS-Trust 2005
    ///   `RequestSecurityTokenResponse`.
    /// - `TokenNotFound` if the root closes without a token child.
    pub fn extract(&self, wresult: &str) -> Result<String, WsFedError> {
        if wresult.len() > self.max_wresult_length {
            return Err(WsFedError::MessageTooLarge {
                len: wresult.len(),
                max: self.max_wresult_length,
            });
        }

        let mut reader = NsReader::from_str(wresult);
        reader.config_mut().trim_text(false);

        let mut state = State::Prolog;
        let mut root_bindings: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();
        let mut token: Option<String> = None;
        let mut matches = 0usize;

        loop {
            let (resolved, event) = reader.read_resolved_event().map_err(malformed)?;
            let in_trust_namespace = match resolved {
                ResolveResult::Bound(ns) => ns.as_ref() == WS_TRUST_2005_NAMESPACE.as_bytes(),
                ResolveResult::Unbound => false,
                ResolveResult::Unknown(prefix) => {
                    return Err(WsFedError::MalformedMessage(format!(
                        "undeclared namespace prefix '{}'",
                        String::from_utf8_lossy(&prefix)
                    )));
                }
            };
            check_content(&reader, &event)?;

            state = match state {
                State::Prolog => match event {
                    Event::Start(ref e) | Event::Empty(ref e) => {
                        let is_root = in_trust_namespace
                            && e.local_name().as_ref() == REQUEST_SECURITY_TOKEN_RESPONSE.as_bytes();
                        if !is_root {
                            return Err(unexpected_root(&reader, e));
                        }
                        if matches!(event, Event::Empty(_)) {
                            tracing::debug!("empty RequestSecurityTokenResponse");
                            State::Done
                        } else {
                            root_bindings = namespace_bindings(e)?;
                            State::Scanning
                        }
                    }
                    Event::Text(ref t) if !t.iter().all(u8::is_ascii_whitespace) => {
                        return Err(WsFedError::MalformedMessage(
                            "text content before root element".into(),
                        ));
                    }
                    Event::End(_) => {
                        return Err(WsFedError::MalformedMessage(
                            "end tag before root element".into(),
                        ));
                    }
                    Event::Eof => {
                        return Err(WsFedError::MalformedMessage(
                            "document has no root element".into(),
                        ));
                    }
                    _ => State::Prolog,
                },

                State::Scanning => match event {
                    Event::Start(e) if in_trust_namespace && is_token_element(&e) => {
                        let mut writer = Writer::new(Vec::new());
                        let start = with_bindings(e, &root_bindings)?;
                        writer.write_event(Event::Start(start)).map_err(malformed)?;
                        let inner_start = writer.get_ref().len();
                        State::Buffering {
                            depth: 1,
                            writer,
                            inner_start,
                        }
                    }
                    Event::Empty(e) if in_trust_namespace && is_token_element(&e) => {
                        let mut writer = Writer::new(Vec::new());
                        let start = with_bindings(e, &root_bindings)?;
                        writer.write_event(Event::Empty(start)).map_err(malformed)?;
                        verify_standalone(writer.get_ref())?;
                        matches += 1;
                        token = Some(String::new());
                        State::Scanning
                    }
                    Event::Start(e) => {
                        tracing::trace!(
                            element = %String::from_utf8_lossy(e.name().as_ref()),
                            "skipping response child"
                        );
                        State::Skipping { depth: 1 }
                    }
                    // Root element closed.
                    Event::End(_) => State::Done,
                    Event::Eof => return Err(premature_eof()),
                    _ => State::Scanning,
                },

                State::Skipping { depth } => match event {
                    Event::Start(_) => State::Skipping { depth: depth + 1 },
                    Event::End(_) if depth == 1 => State::Scanning,
                    Event::End(_) => State::Skipping { depth: depth - 1 },
                    Event::Eof => return Err(premature_eof()),
                    _ => State::Skipping { depth },
                },

                State::Buffering {
                    depth,
                    mut writer,
                    inner_start,
                } => match event {
                    Event::Eof => return Err(premature_eof()),
                    Event::End(e) if depth == 1 => {
                        let inner_end = writer.get_ref().len();
                        writer.write_event(Event::End(e)).map_err(malformed)?;
                        let buffer = writer.into_inner();
                        verify_standalone(&buffer)?;
                        let inner = std::str::from_utf8(&buffer[inner_start..inner_end])
                            .map_err(malformed)?;
                        matches += 1;
                        tracing::debug!(len = inner.len(), "buffered RequestedSecurityToken");
                        token = Some(inner.to_string());
                        State::Scanning
                    }
                    event => {
                        let depth = match event {
                            Event::Start(_) => depth + 1,
                            Event::End(_) => depth - 1,
                            _ => depth,
                        };
                        writer.write_event(event).map_err(malformed)?;
                        State::Buffering {
                            depth,
                            writer,
                            inner_start,
                        }
                    }
                },

                State::Done => match event {
                    Event::Eof => break,
                    Event::Text(ref t) if t.iter().all(u8::is_ascii_whitespace) => State::Done,
                    Event::Comment(_) | Event::PI(_) => State::Done,
                    _ => {
                        return Err(WsFedError::MalformedMessage(
                            "content after root element".into(),
                        ));
                    }
                },
            };
        }

        if matches > 1 {
            tracing::warn!(
                count = matches,
                "response carries several RequestedSecurityToken elements; using the last"
            );
        }

        token.ok_or(WsFedError::TokenNotFound)
    }
}

/// Extract with the default limits.
pub fn extract_requested_token(wresult: &str) -> Result<String, WsFedError> {
    TokenExtractor::default().extract(wresult)
}

fn is_token_element(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == REQUESTED_SECURITY_TOKEN.as_bytes()
}

/// `xmlns` / `xmlns:p` declarations carried on `e`, raw.
fn namespace_bindings(e: &BytesStart<'_>) -> Result<Vec<(Vec<u8>, Vec<u8>)>, WsFedError> {
    let mut bindings = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(malformed)?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            bindings.push((key.to_vec(), attr.value.into_owned()));
        }
    }
    Ok(bindings)
}

/// Copy inherited declarations onto the token element unless it
/// redeclares them itself.
fn with_bindings<'a>(
    e: BytesStart<'a>,
    inherited: &[(Vec<u8>, Vec<u8>)],
) -> Result<BytesStart<'a>, WsFedError> {
    let own = namespace_bindings(&e)?;
    let mut start = e;
    for (key, value) in inherited {
        if own.iter().any(|(k, _)| k == key) {
            continue;
        }
        start.push_attribute(Attribute {
            key: QName(key.as_slice()),
            value: Cow::Borrowed(value.as_slice()),
        });
    }
    Ok(start)
}

/// Well-formedness checks `quick_xml` defers until asked: attribute
/// syntax and uniqueness, attribute prefixes, entity references in
/// text and attribute values. Document type declarations are refused.
fn check_content(reader: &NsReader<&[u8]>, event: &Event<'_>) -> Result<(), WsFedError> {
    match event {
        Event::Start(e) | Event::Empty(e) => {
            for attr in e.attributes() {
                let attr = attr.map_err(malformed)?;
                attr.unescape_value().map_err(malformed)?;
                let key = attr.key.as_ref();
                if key == b"xmlns" || key.starts_with(b"xmlns:") || key.starts_with(b"xml:") {
                    continue;
                }
                if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attr.key) {
                    return Err(WsFedError::MalformedMessage(format!(
                        "undeclared namespace prefix '{}' on attribute",
                        String::from_utf8_lossy(&prefix)
                    )));
                }
            }
            Ok(())
        }
        Event::Text(t) => t.unescape().map(|_| ()).map_err(malformed),
        Event::DocType(_) => Err(WsFedError::MalformedMessage(
            "document type declarations are not allowed".into(),
        )),
        _ => Ok(()),
    }
}

/// Re-parse a buffered token document: exactly one element, balanced
/// tags, every element and attribute prefix bound, attributes and
/// entity references valid (see [`check_content`]).
fn verify_standalone(buffer: &[u8]) -> Result<(), WsFedError> {
    let text = std::str::from_utf8(buffer).map_err(malformed)?;
    let mut reader = NsReader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        let (resolved, event) = reader.read_resolved_event().map_err(malformed)?;
        if let ResolveResult::Unknown(prefix) = resolved {
            return Err(WsFedError::MalformedMessage(format!(
                "undeclared namespace prefix '{}' in token",
                String::from_utf8_lossy(&prefix)
            )));
        }
        check_content(&reader, &event)?;
        match event {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 || roots != 1 {
        return Err(WsFedError::MalformedMessage(
            "buffered token is not a single well-formed element".into(),
        ));
    }
    Ok(())
}

fn unexpected_root(reader: &NsReader<&[u8]>, e: &BytesStart<'_>) -> WsFedError {
    let (resolved, local) = reader.resolve_element(e.name());
    let namespace = match resolved {
        ResolveResult::Bound(ns) => String::from_utf8_lossy(ns.as_ref()).into_owned(),
        _ => String::new(),
    };
    WsFedError::UnexpectedRootElement {
        expected: format!("{{{WS_TRUST_2005_NAMESPACE}}}{REQUEST_SECURITY_TOKEN_RESPONSE}"),
        found: format!("{{{namespace}}}{}", String::from_utf8_lossy(local.as_ref())),
    }
}

fn premature_eof() -> WsFedError {
    WsFedError::MalformedMessage("unexpected end of document".into())
}

fn malformed(e: impl std::fmt::Display) -> WsFedError {
    WsFedError::MalformedMessage(e.to_string())
}
