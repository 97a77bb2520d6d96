//! Application error handling with codes, context and recovery suggestions
//!
//! Every failure surfaced by the `hooksign` tools maps to an [`ErrorCode`]
//! and a process exit code, so scripts can tell a tampered payload from an
//! expired one without parsing messages.

use hooksign_crypto::SignatureErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    ConfigValidationError = 3003,
    MissingSecret = 3004,

    // Validation errors (6xxx)
    ValidationError = 6000,
    InvalidPayload = 6001,

    // Signature errors (7xxx)
    SignatureError = 7000,
    HeaderMalformed = 7001,
    SchemeNotFound = 7002,
    SignatureMismatch = 7003,
    TimestampExpired = 7004,
    HeaderIsList = 7005,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            6 => "Validation",
            7 => "Signature",
            _ => "Unknown",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::HeaderMalformed => exit_codes::HEADER_MALFORMED,
            Self::SchemeNotFound => exit_codes::SCHEME_NOT_FOUND,
            Self::SignatureMismatch => exit_codes::SIGNATURE_MISMATCH,
            Self::TimestampExpired => exit_codes::TIMESTAMP_EXPIRED,
            Self::SignatureError | Self::HeaderIsList => exit_codes::SIGNATURE_ERROR,
            Self::ValidationError | Self::InvalidPayload => exit_codes::VALIDATION_ERROR,
            Self::ConfigError
            | Self::ConfigNotFound
            | Self::ConfigParseError
            | Self::ConfigValidationError
            | Self::MissingSecret => exit_codes::CONFIG_ERROR,
            Self::IoError | Self::FileNotFound | Self::PermissionDenied => exit_codes::IO_ERROR,
            Self::Unknown | Self::Internal => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<SignatureErrorKind> for ErrorCode {
    fn from(kind: SignatureErrorKind) -> Self {
        match kind {
            SignatureErrorKind::HeaderMalformed => Self::HeaderMalformed,
            SignatureErrorKind::SchemeNotFound => Self::SchemeNotFound,
            SignatureErrorKind::SignatureMismatch => Self::SignatureMismatch,
            SignatureErrorKind::TimestampExpired => Self::TimestampExpired,
        }
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    // Convenience constructors

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .hooksign.toml file or omit --config to use defaults")
    }

    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    pub fn missing_secret(env: &str) -> Self {
        Self::new(
            ErrorCode::MissingSecret,
            format!("No signing secret available: {} is not set", env),
        )
        .with_suggestion(format!("Pass --secret or export {}", env))
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPayload, message)
    }
}

/// Serializable error report for logging and machine-readable output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
    pub const SIGNATURE_ERROR: i32 = 10;
    pub const HEADER_MALFORMED: i32 = 11;
    pub const SCHEME_NOT_FOUND: i32 = 12;
    pub const SIGNATURE_MISMATCH: i32 = 13;
    pub const TIMESTAMP_EXPIRED: i32 = 14;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::InvalidPayload, format!("JSON parse error: {}", err))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

impl From<hooksign_crypto::Error> for Error {
    fn from(err: hooksign_crypto::Error) -> Self {
        let message = err.to_string();
        match err {
            hooksign_crypto::Error::Signature(sig) => {
                let header = sig.detail.header.clone();
                Error::new(sig.kind.into(), message)
                    .with_context(format!("Header: {}", header))
                    .with_source(sig)
            }
            hooksign_crypto::Error::HeaderIsList { .. } => {
                Error::new(ErrorCode::HeaderIsList, message)
                    .with_suggestion("Pass exactly one signature header value")
            }
            hooksign_crypto::Error::Payload(inner) => {
                Error::new(ErrorCode::InvalidPayload, message).with_source(inner)
            }
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooksign_crypto::{verify_header, verify_header_with_tolerance};

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::SignatureMismatch.to_string(), "E7003");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::MissingSecret.category(), "Configuration");
        assert_eq!(ErrorCode::TimestampExpired.category(), "Signature");
    }

    #[test]
    fn test_signature_kinds_have_distinct_exit_codes() {
        let codes = [
            ErrorCode::HeaderMalformed.exit_code(),
            ErrorCode::SchemeNotFound.exit_code(),
            ErrorCode::SignatureMismatch.exit_code(),
            ErrorCode::TimestampExpired.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_signature_error() {
        let err: Error = verify_header_with_tolerance("body", "t=1,v1=00", "secret", 0)
            .unwrap_err()
            .into();

        assert_eq!(err.code, ErrorCode::SignatureMismatch);
        assert_eq!(err.exit_code(), exit_codes::SIGNATURE_MISMATCH);
        assert_eq!(err.context.as_deref(), Some("Header: t=1,v1=00"));
    }

    #[test]
    fn test_from_header_list() {
        let err: Error = verify_header("body", vec!["t=1", "t=2"], "secret")
            .unwrap_err()
            .into();

        assert_eq!(err.code, ErrorCode::HeaderIsList);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_missing_secret_never_echoes_value() {
        let err = Error::missing_secret("HOOKSIGN_SECRET");
        assert_eq!(err.code, ErrorCode::MissingSecret);
        assert!(err.to_string().contains("HOOKSIGN_SECRET"));
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::invalid_payload("Payload is not JSON").with_context("While signing");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E6001"));
        assert!(json.contains("Validation"));
        assert!(json.contains("INVALID_PAYLOAD"));
    }
}
