//! Runs the legacy, EIP-1559 and CIP-64 transaction demos against a Celo
//! network and prints a summary of each receipt.

use anyhow::Context;
use celo_tx_types::application::report::print_failure;
use celo_tx_types::application::{DemoContext, DemoRunner};
use celo_tx_types::config::DemoConfig;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "celo-tx-types", version, about)]
struct Cli {
    /// Optional config file (TOML, YAML or JSON).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RPC endpoint, overriding the chain default.
    #[arg(long, value_name = "URL")]
    rpc_url: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn bootstrap(cli: Cli) -> anyhow::Result<DemoContext> {
    let config = DemoConfig::load(cli.config.as_deref(), cli.rpc_url)
        .context("failed to load configuration")?;
    DemoContext::bootstrap(&config).context("failed to set up the signing account")
}

#[tokio::main]
async fn main() -> ExitCode {
    // a missing .env file is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    let context = match bootstrap(Cli::parse()) {
        Ok(context) => context,
        Err(err) => {
            print_failure(&mut std::io::stderr(), &format!("{err:#}"));
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    let outcome = DemoRunner::default()
        .run_or_report(&context, &mut stdout, |err| {
            print_failure(&mut std::io::stderr(), &err);
        })
        .await;

    match outcome {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}
