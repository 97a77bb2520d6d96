//! Timestamped HMAC-SHA256 signature headers for webhook payloads.
//!
//! This crate provides:
//! - Canonical string form for structured payloads
//! - Header generation (`t=<timestamp>,v1=<signature>`)
//! - Header verification with constant-time comparison and replay tolerance
//!
//! # Example
//!
//! ```
//! use hooksign_crypto::{generate_header, verify_header_with_tolerance};
//!
//! let header = generate_header("Secret Message", "my-secret", Some(1632994609));
//! verify_header_with_tolerance("Secret Message", header.as_str(), "my-secret", 0).unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod header;
mod hmac_impl;
mod payload;
mod signature;
pub mod testing;
mod timing;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Error, Result, SignatureError, SignatureErrorDetail, SignatureErrorKind};
pub use header::{parse_header, HeaderTimestamp, ParsedHeader, SignatureHeader};
pub use hmac_impl::compute_signature;
pub use payload::generate_payload_string;
pub use signature::{
    generate_header, generate_header_for, verify_header, verify_header_with_tolerance, Verifier,
    DEFAULT_TOLERANCE, EXPECTED_SCHEME,
};
pub use testing::{generate_test_header_string, TestHeaderOptions};
pub use timing::{constant_time_compare, matches_any};
