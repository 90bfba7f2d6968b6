//! Waiting on remote jobs
//!
//! The wait operation of the component: poll the job API until the job is
//! terminal, dump the output artifacts, and propagate cancellation from
//! the surrounding execution context to the remote job.

use std::time::Duration;

use tracing::{info, warn};

use mljob_client::MlEngineClient;
use mljob_core::domain::job::Job;

use crate::api::JobApi;
use crate::context::{CancelSignal, ExecutionContext};
use crate::error::{ComponentError, Result};
use crate::output::OutputWriter;

/// Polling parameters for [`wait_job`]
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Interval between job-status polls
    pub wait_interval: Duration,
    /// Whether to emit tensorboard UI metadata for the job's output directory
    pub show_tensorboard: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            wait_interval: Duration::from_secs(30),
            show_tensorboard: true,
        }
    }
}

/// Poll `job_id` until it reaches a terminal state
///
/// Once the job is terminal its artifacts are dumped — also for failed and
/// cancelled jobs, so downstream steps can inspect the payload. Returns
/// the job, or [`ComponentError::JobFailed`] when the terminal state is
/// not SUCCEEDED.
///
/// Transient API errors are not retried here; they propagate to the
/// caller unchanged.
pub async fn wait_for_job_done(
    api: &impl JobApi,
    writer: &OutputWriter,
    project_id: &str,
    job_id: &str,
    opts: &WaitOptions,
) -> Result<Job> {
    let job = loop {
        let job = api.get_job(project_id, job_id).await?;
        if job.state.is_terminal() {
            break job;
        }
        info!(
            "Job {} is {}, checking again in {}s",
            job_id,
            job.state,
            opts.wait_interval.as_secs()
        );
        tokio::time::sleep(opts.wait_interval).await;
    };

    writer.write_job(&job)?;
    if opts.show_tensorboard && !job.job_dir().is_empty() {
        writer.write_tensorboard_metadata(job.job_dir())?;
    }

    if !job.state.is_success() {
        return Err(ComponentError::JobFailed {
            job_id: job.job_id.clone(),
            state: job.state,
            message: job.error_message.clone().unwrap_or_default(),
        });
    }

    info!("Job {} succeeded", job.job_id);
    Ok(job)
}

/// Best-effort cancellation of a remote job
///
/// Failure is logged and swallowed: by the time this runs the step is
/// already being torn down, and the job may have finished on its own.
pub async fn cancel_job(api: &impl JobApi, project_id: &str, job_id: &str) {
    info!("Cancelling job {}...", job_id);
    if let Err(e) = api.cancel_job(project_id, job_id).await {
        warn!("Failed to cancel job {}: {}", job_id, e);
    }
}

/// Wait for a remote job to reach a terminal state
///
/// Registers a cancel handler with the execution context before starting
/// to wait: if the step is externally cancelled while polling, the remote
/// job is told to cancel, and the wait then observes its CANCELLED
/// terminal state.
///
/// # Arguments
/// * `project_id` - The ID of the parent project of the job
/// * `job_id` - The ID of the job to wait for
/// * `opts` - Polling parameters; see [`WaitOptions`]
pub async fn wait_job(project_id: &str, job_id: &str, opts: WaitOptions) -> Result<Job> {
    let client = MlEngineClient::new();
    let signal = CancelSignal::from_process_signals();
    wait_job_with(
        &client,
        signal,
        &OutputWriter::default(),
        project_id,
        job_id,
        opts,
    )
    .await
}

/// [`wait_job`] over an explicit API handle, cancellation signal and writer
pub async fn wait_job_with<A: JobApi>(
    api: &A,
    signal: CancelSignal,
    writer: &OutputWriter,
    project_id: &str,
    job_id: &str,
    opts: WaitOptions,
) -> Result<Job> {
    let ctx = ExecutionContext::new(signal);
    ctx.run(
        wait_for_job_done(api, writer, project_id, job_id, &opts),
        || cancel_job(api, project_id, job_id),
    )
    .await
}
