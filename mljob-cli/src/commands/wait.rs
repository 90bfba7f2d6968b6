//! Wait command handler
//!
//! Blocks on a remote job until it reaches a terminal state and renders
//! the result. Cancellation of the step (SIGINT/SIGTERM) is propagated to
//! the remote job before the wait resumes.

use std::time::Duration;

use anyhow::{Result, ensure};
use colored::*;
use mljob_client::MlEngineClient;
use mljob_component::{CancelSignal, OutputWriter, WaitOptions, wait_job_with};
use mljob_core::domain::job::{Job, JobState};

use crate::config::Config;

/// Handle the wait command
///
/// # Arguments
/// * `config` - The CLI configuration
/// * `project_id` - The ID of the parent project of the job
/// * `job_id` - The ID of the job to wait for
/// * `wait_interval` - Seconds between job-status polls
/// * `show_tensorboard` - Whether to emit tensorboard UI metadata
pub async fn handle_wait(
    config: &Config,
    project_id: &str,
    job_id: &str,
    wait_interval: u64,
    show_tensorboard: bool,
) -> Result<()> {
    ensure!(!project_id.is_empty(), "project_id cannot be empty");
    ensure!(!job_id.is_empty(), "job_id cannot be empty");
    ensure!(wait_interval > 0, "wait-interval must be greater than 0");

    let client = MlEngineClient::with_base_url(&config.endpoint);
    let signal = CancelSignal::from_process_signals();
    let opts = WaitOptions {
        wait_interval: Duration::from_secs(wait_interval),
        show_tensorboard,
    };

    println!(
        "{} Waiting for job {} in project {}...",
        "▸".cyan(),
        job_id.dimmed(),
        project_id.dimmed()
    );

    let job = wait_job_with(
        &client,
        signal,
        &OutputWriter::default(),
        project_id,
        job_id,
        opts,
    )
    .await?;

    print_job_details(&job);

    Ok(())
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    let status_colored = colorize_state(job.state);

    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.job_id.cyan());
    println!("  State:     {}", status_colored);

    if let Some(created) = job.create_time {
        println!("  Created:   {}", created.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(started) = job.start_time {
        println!("  Started:   {}", started.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(ended) = job.end_time {
        println!("  Ended:     {}", ended.format("%Y-%m-%d %H:%M:%S"));

        // Calculate duration
        if let Some(started) = job.start_time {
            let duration = ended.signed_duration_since(started);
            println!("  Duration:  {}s", duration.num_seconds());
        }
    }

    if !job.job_dir().is_empty() {
        println!("  Job dir:   {}", job.job_dir());
    }

    if let Some(error) = &job.error_message {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }

    if let Some(output) = &job.training_output {
        println!("\n{}", "Training output:".bold());
        if let Ok(pretty) = serde_json::to_string_pretty(output) {
            println!("{}", pretty);
        } else {
            println!("{:?}", output);
        }
    }
}

/// Colorize job state for display
fn colorize_state(state: JobState) -> colored::ColoredString {
    let state_str = state.to_string();
    match state {
        JobState::Queued | JobState::Preparing => state_str.yellow(),
        JobState::Running => state_str.cyan(),
        JobState::Succeeded => state_str.green(),
        JobState::Failed => state_str.red(),
        JobState::Cancelling | JobState::Cancelled => state_str.dimmed(),
        JobState::StateUnspecified => state_str.dimmed(),
    }
}
