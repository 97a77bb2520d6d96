//! Configuration schema definitions

use hooksign_crypto::{DEFAULT_TOLERANCE, EXPECTED_SCHEME};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub secret: SecretConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        let scheme = &self.verify.scheme;
        if scheme.is_empty() || scheme.contains([',', '=']) || scheme == "t" {
            return Err(Error::config_validation(format!(
                "verify.scheme must be a non-empty key without ',' or '=' and not 't', got {:?}",
                scheme
            )));
        }

        if self.secret.env.trim().is_empty() {
            return Err(Error::config_validation("secret.env must name an environment variable"));
        }

        Ok(())
    }
}

/// Verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Maximum signature age in seconds, zero or negative disables the check
    #[serde(default = "default_tolerance")]
    pub tolerance_secs: i64,

    /// Header key carrying signatures
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: default_tolerance(),
            scheme: default_scheme(),
        }
    }
}

fn default_tolerance() -> i64 {
    DEFAULT_TOLERANCE
}

fn default_scheme() -> String {
    EXPECTED_SCHEME.to_string()
}

/// Where the signing secret comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretConfig {
    /// Environment variable holding the secret
    #[serde(default = "default_secret_env")]
    pub env: String,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            env: default_secret_env(),
        }
    }
}

fn default_secret_env() -> String {
    "HOOKSIGN_SECRET".to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
