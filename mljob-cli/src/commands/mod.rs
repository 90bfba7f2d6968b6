//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod cancel;
mod wait;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Wait for a job to reach a terminal state
    Wait {
        /// The ID of the parent project of the job
        project_id: String,

        /// The ID of the job to wait for
        job_id: String,

        /// Seconds between job-status polls
        #[arg(long, default_value_t = 30)]
        wait_interval: u64,

        /// Emit tensorboard UI metadata for the job's output directory
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        show_tensorboard: bool,
    },
    /// Request cancellation of a job
    Cancel {
        /// The ID of the parent project of the job
        project_id: String,

        /// The ID of the job to cancel
        job_id: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Wait {
            project_id,
            job_id,
            wait_interval,
            show_tensorboard,
        } => wait::handle_wait(config, &project_id, &job_id, wait_interval, show_tensorboard).await,
        Commands::Cancel { project_id, job_id } => {
            cancel::handle_cancel(config, &project_id, &job_id).await
        }
    }
}
