//! Sign command - generate a signature header

use super::resolve_secret;
use crate::input::{read_json, read_text};
use hooksign_cli::output::OutputFormat;
use hooksign_core::config::Config;
use hooksign_core::Result;
use hooksign_crypto::{generate_header, generate_header_for};

/// Run sign command
pub fn run(
    config: &Config,
    input: &str,
    json: bool,
    timestamp: Option<i64>,
    secret: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let secret = resolve_secret(config, secret)?;
    let timestamp = timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp());

    let header = if json {
        generate_header_for(&read_json(input)?, &secret, Some(timestamp))?
    } else {
        generate_header(&read_text(input)?, &secret, Some(timestamp))
    };

    tracing::debug!(timestamp, canonical = json, "Payload signed");

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "header": header, "timestamp": timestamp })
        ),
        OutputFormat::Text => println!("{}", header),
    }

    Ok(())
}
