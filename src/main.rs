//! sheet-texter - promo texts for new sheet sign-ups
//!
//! Runs the batch once and exits; schedule it externally.

#![allow(missing_docs)]

use clap::Parser;
use sheet_texter::config::loader::load_dotenv;
use sheet_texter::utils::logging::{LogFormat, init_logging};
use sheet_texter::{
    Config, DryRunTransport, JobOptions, LONG_VERSION, Result, RunReport, TextNowTransport,
    run_job,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "sheet-texter", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// YAML config file; credentials missing from it come from the environment
    #[arg(short, long, env = "SHEET_TEXTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the state file location
    #[arg(long)]
    state_file: Option<String>,

    /// Log messages instead of sending them and leave the state file alone
    #[arg(long)]
    dry_run: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before logging so RUST_LOG may come from .env
    let dotenv_problem = load_dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format);

    if let Some(e) = dotenv_problem {
        warn!(error = %e, "Ignoring malformed .env file");
    }

    match run(cli).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Display, not Debug
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<RunReport> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    if let Some(path) = cli.state_file {
        config = config.with_state_path(path);
    }

    if cli.dry_run {
        info!("Dry run: no texts will be sent");
        let transport = DryRunTransport::new();
        run_job(&config, &transport, JobOptions { dry_run: true }).await
    } else {
        let transport = TextNowTransport::connect(config.textnow())?;
        run_job(&config, &transport, JobOptions::default()).await
    }
}
