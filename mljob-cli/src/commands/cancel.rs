//! Cancel command handler

use anyhow::{Result, ensure};
use colored::*;
use mljob_client::MlEngineClient;

use crate::config::Config;

/// Handle the cancel command
///
/// Unlike the cancel handler armed during a wait, a cancellation the user
/// asked for explicitly is not best-effort: failures propagate.
///
/// # Arguments
/// * `config` - The CLI configuration
/// * `project_id` - The ID of the parent project of the job
/// * `job_id` - The ID of the job to cancel
pub async fn handle_cancel(config: &Config, project_id: &str, job_id: &str) -> Result<()> {
    ensure!(!project_id.is_empty(), "project_id cannot be empty");
    ensure!(!job_id.is_empty(), "job_id cannot be empty");

    let client = MlEngineClient::with_base_url(&config.endpoint);
    client.cancel_job(project_id, job_id).await?;

    println!(
        "{} Requested cancellation of job {}",
        "✓".green(),
        job_id.cyan()
    );

    Ok(())
}
