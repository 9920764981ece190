//! authgate-validate - check identity provider configuration before startup
//!
//! Prints every problem found and exits non-zero when there is at least one.

use authgate_rs::Config;
use authgate_rs::utils::logging::{LogLevel, init_logging};
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Exit code when the configuration loaded but has problems
const EXIT_INVALID: u8 = 1;
/// Exit code when the configuration could not be loaded
const EXIT_LOAD_FAILED: u8 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "authgate-validate", version, about = "Validate identity provider configuration")]
struct Cli {
    /// Path to the gateway configuration file
    #[arg(short, long, env = "AUTHGATE_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Output format for the problem list
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_json);

    let config = match Config::from_file(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}", cli.config.display(), e);
            eprintln!("Error: failed to load {}: {}", cli.config.display(), e);
            return ExitCode::from(EXIT_LOAD_FAILED);
        }
    };

    let problems = config.problems();
    info!(
        "Checked {} provider(s), found {} problem(s)",
        config.providers().len(),
        problems.len()
    );

    match cli.format {
        OutputFormat::Text => {
            for problem in &problems {
                println!("{}", problem);
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "valid": problems.is_empty(),
                "problems": problems,
            });
            println!("{}", report);
        }
    }

    if problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}
