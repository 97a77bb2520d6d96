//! Inspect command - show the fields of a signature header

use hooksign_cli::output::{format_age, format_count, OutputFormat};
use hooksign_core::config::Config;
use hooksign_core::Result;
use hooksign_crypto::{parse_header, HeaderTimestamp};
use owo_colors::OwoColorize;

/// Run inspect command
pub fn run(config: &Config, header: &str, scheme: Option<&str>, format: OutputFormat) -> Result<()> {
    let scheme = scheme.unwrap_or(&config.schema.verify.scheme);

    let parsed = parse_header(header, scheme);

    let now = chrono::Utc::now().timestamp();

    if format == OutputFormat::Json {
        let (state, seconds) = match parsed.timestamp {
            HeaderTimestamp::Missing => ("missing", None),
            HeaderTimestamp::Invalid => ("invalid", None),
            HeaderTimestamp::Seconds(ts) => ("valid", Some(ts)),
        };
        println!(
            "{}",
            serde_json::json!({
                "scheme": scheme,
                "timestamp": {
                    "state": state,
                    "seconds": seconds,
                    "age_secs": seconds.map(|ts| now.saturating_sub(ts)),
                },
                "signatures": parsed.signatures,
            })
        );
        return Ok(());
    }

    match parsed.timestamp {
        HeaderTimestamp::Missing => println!("{:<11} {}", "Timestamp:".dimmed(), "missing".red()),
        HeaderTimestamp::Invalid => println!("{:<11} {}", "Timestamp:".dimmed(), "invalid".red()),
        HeaderTimestamp::Seconds(ts) => {
            let signed_at = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| "out of range".to_string());
            println!("{:<11} {} ({})", "Timestamp:".dimmed(), ts, signed_at);
            println!("{:<11} {}", "Age:".dimmed(), format_age(now.saturating_sub(ts)));
        }
    }

    println!(
        "{:<11} {}",
        "Scheme:".dimmed(),
        format!("{} ({})", scheme, format_count(parsed.signatures.len(), "signature", "signatures"))
    );
    for signature in &parsed.signatures {
        println!("  {}", signature);
    }

    Ok(())
}
