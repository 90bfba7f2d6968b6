//! Access to the remote job API
//!
//! The component operations talk to the job API through the [`JobApi`]
//! trait rather than the HTTP client directly, so tests can script the
//! remote job's lifecycle without a network.

use async_trait::async_trait;
use mljob_client::{ClientError, MlEngineClient};
use mljob_core::domain::job::Job;

/// The slice of the job API the component operations consume
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Fetch the current representation of a job
    async fn get_job(&self, project_id: &str, job_id: &str) -> Result<Job, ClientError>;

    /// Request cancellation of a job
    async fn cancel_job(&self, project_id: &str, job_id: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl JobApi for MlEngineClient {
    async fn get_job(&self, project_id: &str, job_id: &str) -> Result<Job, ClientError> {
        MlEngineClient::get_job(self, project_id, job_id).await
    }

    async fn cancel_job(&self, project_id: &str, job_id: &str) -> Result<(), ClientError> {
        MlEngineClient::cancel_job(self, project_id, job_id).await
    }
}
