//! HMAC-SHA256 signature computation.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 of `payload` keyed by `secret`.
///
/// # Returns
/// Lowercase hex string, 64 characters
pub fn compute_signature(payload: &str, secret: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret)
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// The string that gets signed for a given timestamp and payload.
pub(crate) fn signed_payload(timestamp: i64, payload: &str) -> String {
    format!("{timestamp}.{payload}")
}
