//! Core utilities for the hooksign tools
//!
//! This crate provides functionality shared by the command-line front ends:
//!
//! - **Error handling**: Errors with codes, context, recovery suggestions and exit codes
//! - **Configuration**: TOML-based configuration for tolerance, scheme and secret source
//!
//! # Example
//!
//! ```rust,no_run
//! use hooksign_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! let secret = config.secret().expect("No secret configured");
//! config
//!     .verifier()
//!     .verify("payload", "t=1632994609,v1=00", secret)
//!     .ok();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
