//! Command implementations

pub mod inspect;
pub mod payload;
pub mod sign;
pub mod verify;

use hooksign_core::config::Config;
use hooksign_core::Result;

/// Secret from the command line, else from the configured environment variable
pub(crate) fn resolve_secret(config: &Config, flag: Option<String>) -> Result<String> {
    match flag {
        Some(secret) => Ok(secret),
        None => config.secret(),
    }
}
