//! Payload command - print the canonical signing string

use crate::input::read_json;
use hooksign_cli::output::OutputFormat;
use hooksign_core::Result;
use hooksign_crypto::generate_payload_string;

/// Run payload command
pub fn run(input: &str, format: OutputFormat) -> Result<()> {
    let value = read_json(input)?;
    let payload = generate_payload_string(&value)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "payload": payload })),
        OutputFormat::Text => println!("{}", payload),
    }

    Ok(())
}
