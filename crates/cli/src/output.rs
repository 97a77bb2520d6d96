//! Terminal output utilities
//!
//! Status lines go to stderr so that stdout only ever carries the
//! requested header or payload.

use hooksign_core::Error;
use owo_colors::OwoColorize;
use std::str::FromStr;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }
}

/// How results and errors are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored, human-readable lines
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

/// Print an error in the requested format
///
/// JSON reports go to stdout so callers can parse them; text goes to stderr.
pub fn print_error(err: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&err.to_report()) {
            Ok(json) => println!("{}", json),
            Err(_) => Status::error(&err.to_string()),
        },
        OutputFormat::Text => Status::error(&err.to_string()),
    }
}

/// Format a signature age in seconds for display
pub fn format_age(secs: i64) -> String {
    if secs < 0 {
        return format!("{} in the future", format_age(secs.saturating_neg()));
    }

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86_400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3600)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
