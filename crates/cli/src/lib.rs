//! CLI utilities for the hooksign tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Error reports in text or JSON
//! - Human-readable ages and counts

#![warn(missing_docs)]

pub mod output;
