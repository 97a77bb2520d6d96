//! Configuration loading and schema definitions
//!
//! Settings for verification tolerance, signature scheme and secret lookup.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
