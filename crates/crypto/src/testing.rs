//! Header construction for tests.
//!
//! Lets test code build headers with overridden fields (a stale
//! timestamp, a foreign scheme, a forged signature) while everything left
//! unset is filled in the same way [`generate_header`](crate::generate_header) does.

use crate::hmac_impl::{compute_signature, signed_payload};
use crate::signature::{now_seconds, EXPECTED_SCHEME};

/// Fields of a test header. Unset fields take their regular defaults.
#[derive(Debug, Clone, Default)]
pub struct TestHeaderOptions {
    /// Signing time in seconds, defaults to now
    pub timestamp: Option<i64>,
    /// Scheme key, defaults to `v1`
    pub scheme: Option<String>,
    /// Signature written verbatim, defaults to the HMAC of the payload
    pub signature: Option<String>,
    /// Payload string to sign
    pub payload: String,
    /// Secret to sign with
    pub secret: String,
}

/// Assemble a header from `options`.
pub fn generate_test_header_string(options: &TestHeaderOptions) -> String {
    let timestamp = options.timestamp.unwrap_or_else(now_seconds);
    let scheme = options.scheme.as_deref().unwrap_or(EXPECTED_SCHEME);
    let signature = options.signature.clone().unwrap_or_else(|| {
        compute_signature(
            &signed_payload(timestamp, &options.payload),
            options.secret.as_bytes(),
        )
    });

    format!("t={timestamp},{scheme}={signature}")
}
