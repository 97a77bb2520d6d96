//! Error types for signing and verification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for signature operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or verifying a signature header.
#[derive(Debug, Error)]
pub enum Error {
    /// The header arrived as a list of values instead of a single value.
    ///
    /// This points at the caller's transport layer, not at the signature.
    #[error("Unexpected: a list of {count} values was passed as the signature header")]
    HeaderIsList {
        /// Number of values received
        count: usize,
    },

    /// Verification failed
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// Structured payload could not be serialized
    #[error("Payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

impl Error {
    /// Verification failure kind, if this is a signature error.
    pub fn signature_kind(&self) -> Option<SignatureErrorKind> {
        match self {
            Self::Signature(err) => Some(err.kind),
            _ => None,
        }
    }
}

/// The stage at which verification rejected a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureErrorKind {
    /// Header could not be parsed or carried no usable timestamp
    HeaderMalformed,
    /// No signature was present under the expected scheme
    SchemeNotFound,
    /// Signatures were present but none matched the payload
    SignatureMismatch,
    /// Signature matched but the timestamp is too old
    TimestampExpired,
}

impl SignatureErrorKind {
    /// Human-readable message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::HeaderMalformed => "Unable to extract timestamp and signatures from header",
            Self::SchemeNotFound => "No signatures found with expected scheme",
            Self::SignatureMismatch => {
                "No signatures found matching the expected signature for payload."
            }
            Self::TimestampExpired => "Timestamp outside the tolerance zone",
        }
    }
}

/// Raw inputs of a failed verification.
///
/// Holds the header and payload exactly as received. Never the secret or
/// the computed signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureErrorDetail {
    /// The header as received
    pub header: String,
    /// The payload as received
    pub payload: String,
}

/// Structured verification failure.
#[derive(Debug, Clone, Error)]
#[error("{}", .kind.message())]
pub struct SignatureError {
    /// Which check failed
    pub kind: SignatureErrorKind,
    /// Header and payload involved
    pub detail: SignatureErrorDetail,
}

impl SignatureError {
    /// Create a new signature error from the raw header and payload.
    pub fn new(kind: SignatureErrorKind, header: &str, payload: &str) -> Self {
        Self {
            kind,
            detail: SignatureErrorDetail {
                header: header.to_string(),
                payload: payload.to_string(),
            },
        }
    }
}
