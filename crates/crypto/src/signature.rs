//! Signature header generation and verification.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result, SignatureError, SignatureErrorKind};
use crate::header::{parse_header, HeaderTimestamp, SignatureHeader};
use crate::hmac_impl::{compute_signature, signed_payload};
use crate::payload::generate_payload_string;
use crate::timing::matches_any;

/// Scheme key under which signatures are written and looked up.
pub const EXPECTED_SCHEME: &str = "v1";

/// Default maximum signature age, in seconds.
pub const DEFAULT_TOLERANCE: i64 = 300;

/// Current unix time in whole seconds.
pub(crate) fn now_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Build a signature header for a string payload.
///
/// Uses the current time when `timestamp` is `None`.
pub fn generate_header(payload: &str, secret: impl AsRef<[u8]>, timestamp: Option<i64>) -> String {
    let timestamp = timestamp.unwrap_or_else(now_seconds);
    let signature = compute_signature(&signed_payload(timestamp, payload), secret.as_ref());

    debug!(timestamp, scheme = EXPECTED_SCHEME, "Generated signature header");

    format!("t={timestamp},{EXPECTED_SCHEME}={signature}")
}

/// Build a signature header for a structured payload.
///
/// The payload is canonicalized with [`generate_payload_string`] first;
/// the receiving side must verify against that same string.
pub fn generate_header_for<T: Serialize + ?Sized>(
    payload: &T,
    secret: impl AsRef<[u8]>,
    timestamp: Option<i64>,
) -> Result<String> {
    let payload = generate_payload_string(payload)?;
    Ok(generate_header(&payload, secret, timestamp))
}

/// Verify `header` against `payload` with the default tolerance.
pub fn verify_header<'h>(
    payload: impl AsRef<[u8]>,
    header: impl Into<SignatureHeader<'h>>,
    secret: impl AsRef<[u8]>,
) -> Result<()> {
    Verifier::new().verify(payload, header, secret)
}

/// Verify `header` against `payload`, allowing signatures up to
/// `tolerance` seconds old. Zero or negative disables the age check.
pub fn verify_header_with_tolerance<'h>(
    payload: impl AsRef<[u8]>,
    header: impl Into<SignatureHeader<'h>>,
    secret: impl AsRef<[u8]>,
    tolerance: i64,
) -> Result<()> {
    Verifier::new()
        .tolerance(tolerance)
        .verify(payload, header, secret)
}

/// Configurable header verifier.
///
/// # Example
///
/// ```
/// use hooksign_crypto::{generate_header, Verifier};
///
/// let header = generate_header("body", "secret", Some(1_000));
/// Verifier::new()
///     .tolerance(60)
///     .at(1_030)
///     .verify("body", header.as_str(), "secret")
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Verifier {
    scheme: String,
    tolerance: i64,
    now: Option<i64>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            scheme: EXPECTED_SCHEME.to_string(),
            tolerance: DEFAULT_TOLERANCE,
            now: None,
        }
    }
}

impl Verifier {
    /// Verifier for scheme `v1` with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look signatures up under `scheme` instead of `v1`.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Maximum signature age in seconds; zero or negative disables the check.
    pub fn tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Evaluate the age check against a fixed time instead of the clock.
    pub fn at(mut self, now: i64) -> Self {
        self.now = Some(now);
        self
    }

    /// Verify `header` against `payload` and `secret`.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// header shape, scheme presence, signature equality, then age.
    pub fn verify<'h>(
        &self,
        payload: impl AsRef<[u8]>,
        header: impl Into<SignatureHeader<'h>>,
        secret: impl AsRef<[u8]>,
    ) -> Result<()> {
        let payload = String::from_utf8_lossy(payload.as_ref());

        let header = match header.into() {
            SignatureHeader::Single(header) => header,
            SignatureHeader::List(values) => {
                return Err(Error::HeaderIsList {
                    count: values.len(),
                });
            }
        };

        let fail = |kind: SignatureErrorKind| {
            warn!(?kind, scheme = %self.scheme, "Signature verification failed");
            Error::from(SignatureError::new(kind, &header, &payload))
        };

        let parsed = parse_header(&header, &self.scheme);

        let HeaderTimestamp::Seconds(timestamp) = parsed.timestamp else {
            return Err(fail(SignatureErrorKind::HeaderMalformed));
        };

        if parsed.signatures.is_empty() {
            return Err(fail(SignatureErrorKind::SchemeNotFound));
        }

        let expected = compute_signature(&signed_payload(timestamp, &payload), secret.as_ref());

        if !matches_any(&parsed.signatures, expected.as_bytes()) {
            return Err(fail(SignatureErrorKind::SignatureMismatch));
        }

        let age = self.now.unwrap_or_else(now_seconds).saturating_sub(timestamp);

        if self.tolerance > 0 && age > self.tolerance {
            return Err(fail(SignatureErrorKind::TimestampExpired));
        }

        debug!(timestamp, age, "Signature verified");

        Ok(())
    }
}
