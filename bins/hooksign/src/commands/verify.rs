//! Verify command - check a signature header against a payload

use super::resolve_secret;
use crate::input::{read_input, read_json};
use hooksign_cli::output::{format_age, OutputFormat, Status};
use hooksign_core::config::Config;
use hooksign_core::Result;
use hooksign_crypto::{generate_payload_string, parse_header, SignatureHeader};
use serde::Serialize;

/// Arguments of the verify command
pub struct VerifyArgs {
    pub input: String,
    pub headers: Vec<String>,
    pub tolerance: Option<i64>,
    pub json: bool,
    pub secret: Option<String>,
}

/// JSON output for a successful verification
#[derive(Debug, Serialize)]
struct JsonVerifyOutput {
    valid: bool,
    timestamp: Option<i64>,
    age_secs: Option<i64>,
    tolerance_secs: i64,
}

/// Run verify command
pub fn run(config: &Config, args: VerifyArgs, format: OutputFormat) -> Result<()> {
    let secret = resolve_secret(config, args.secret)?;
    let tolerance = args.tolerance.unwrap_or(config.schema.verify.tolerance_secs);

    let payload = if args.json {
        generate_payload_string(&read_json(&args.input)?)?.into_bytes()
    } else {
        read_input(&args.input)?
    };

    let header = if args.headers.len() == 1 {
        SignatureHeader::from(args.headers[0].as_str())
    } else {
        SignatureHeader::from(args.headers.clone())
    };

    config
        .verifier()
        .tolerance(tolerance)
        .verify(&payload, header, &secret)?;

    let timestamp = parse_header(&args.headers[0], &config.schema.verify.scheme)
        .timestamp
        .seconds();
    let age = timestamp.map(|ts| chrono::Utc::now().timestamp().saturating_sub(ts));

    match format {
        OutputFormat::Json => {
            let output = JsonVerifyOutput {
                valid: true,
                timestamp,
                age_secs: age,
                tolerance_secs: tolerance,
            };
            println!("{}", serde_json::to_string(&output)?);
        }
        OutputFormat::Text => {
            match age {
                Some(age) => {
                    Status::success(&format!("Signature valid, signed {}", describe_age(age)))
                }
                None => Status::success("Signature valid"),
            }
        }
    }

    Ok(())
}

fn describe_age(age: i64) -> String {
    if age < 0 {
        format_age(age)
    } else {
        format!("{} ago", format_age(age))
    }
}
