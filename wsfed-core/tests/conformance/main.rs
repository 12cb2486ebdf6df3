//! Conformance Harness — WS-Federation protocol surface
//!
//! Pins the externally visible vocabulary and behavior of wsfed-core:
//! - Diagnostic code registry and error → code mapping
//! - WS-Trust / WS-Federation fault code tables
//! - Token extraction against golden `wresult` vectors
//!
//! Vector files live in `tests/vectors/`.

mod diagnostic_code_registry;
mod error_code_mapping;
mod fault_code_registry;
mod token_vectors;
