//! mljob CLI
//!
//! Pipeline-step entrypoint for Cloud ML Engine job operations. Each
//! subcommand is a step a pipeline can run as its own container: the step
//! parameters arrive as command-line arguments, results land in the
//! well-known output files.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mljob")]
#[command(about = "Cloud ML Engine job pipeline steps", long_about = None)]
struct Cli {
    /// ML Engine API endpoint
    #[arg(
        long,
        env = "ML_ENGINE_ENDPOINT",
        default_value = mljob_client::DEFAULT_ENDPOINT
    )]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mljob_cli=info,mljob_component=info,mljob_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        endpoint: cli.endpoint,
    };

    handle_command(cli.command, &config).await
}
