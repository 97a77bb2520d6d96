//! hooksign: sign and verify timestamped webhook signature headers.

use clap::{Parser, Subcommand};
use hooksign_cli::output::{print_error, OutputFormat, Status};
use hooksign_core::config::Config;
use hooksign_core::Result;
use hooksign_telemetry::TelemetryConfig;
use std::process::ExitCode;

mod commands;
mod input;

use commands::{inspect, payload, sign, verify};

/// Sign and verify webhook payloads with `t=<timestamp>,v1=<hmac>` headers
#[derive(Parser)]
#[command(name = "hooksign")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical signing string of a JSON payload
    Payload {
        /// JSON file to read, `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Generate a signature header for a payload
    Sign {
        /// Payload file to read, `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Parse the payload as JSON and sign its canonical form
        #[arg(long)]
        json: bool,

        /// Signing time in unix seconds (defaults to now)
        #[arg(short, long, allow_negative_numbers = true)]
        timestamp: Option<i64>,

        /// Signing secret (defaults to the configured environment variable)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Verify a signature header against a payload
    Verify {
        /// Payload file to read, `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Signature header value; repeating it is rejected
        #[arg(short = 'H', long = "header", required = true)]
        headers: Vec<String>,

        /// Maximum signature age in seconds, 0 disables the check
        #[arg(long, allow_negative_numbers = true)]
        tolerance: Option<i64>,

        /// Parse the payload as JSON and verify its canonical form
        #[arg(long)]
        json: bool,

        /// Signing secret (defaults to the configured environment variable)
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Show the fields of a signature header
    Inspect {
        /// Signature header value
        header: String,

        /// Scheme to collect signatures under (defaults to the configured one)
        #[arg(long)]
        scheme: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    let config = Config::load(cli.config.as_deref());

    let level = config
        .as_ref()
        .map(|c| c.schema.logging.level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let telemetry = if cli.verbose {
        TelemetryConfig::with_level(level).verbose()
    } else {
        TelemetryConfig::with_level(level)
    };
    if let Err(err) = hooksign_telemetry::init_with_config(telemetry) {
        Status::warning(&err.to_string());
    }

    let result = config.and_then(|config| run(cli.command, &config, format));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = %err.code, "Command failed");
            print_error(&err, format);
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Commands, config: &Config, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Payload { input } => payload::run(&input, format),

        Commands::Sign {
            input,
            json,
            timestamp,
            secret,
        } => sign::run(config, &input, json, timestamp, secret, format),

        Commands::Verify {
            input,
            headers,
            tolerance,
            json,
            secret,
        } => verify::run(
            config,
            verify::VerifyArgs {
                input,
                headers,
                tolerance,
                json,
                secret,
            },
            format,
        ),

        Commands::Inspect { header, scheme } => {
            inspect::run(config, &header, scheme.as_deref(), format)
        }
    }
}
