//! Job-related API endpoints

use crate::MlEngineClient;
use crate::error::Result;
use mljob_core::domain::job::Job;
use tracing::debug;

impl MlEngineClient {
    // =============================================================================
    // Job Lookup
    // =============================================================================

    /// Get a job by ID
    ///
    /// # Arguments
    /// * `project_id` - The ID of the project that owns the job
    /// * `job_id` - The job ID
    ///
    /// # Returns
    /// The job resource as the API currently sees it
    ///
    /// # Example
    /// ```no_run
    /// # use mljob_client::MlEngineClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = MlEngineClient::new();
    /// let job = client.get_job("my-project", "train_mnist_20260807").await?;
    /// println!("state: {}", job.state);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_job(&self, project_id: &str, job_id: &str) -> Result<Job> {
        let url = format!(
            "{}/projects/{}/jobs/{}",
            self.base_url, project_id, job_id
        );
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Job Cancellation
    // =============================================================================

    /// Request cancellation of a running job
    ///
    /// The call returns as soon as the API accepts the request; the job
    /// transitions through CANCELLING to CANCELLED asynchronously.
    ///
    /// # Arguments
    /// * `project_id` - The ID of the project that owns the job
    /// * `job_id` - The ID of the job to cancel
    pub async fn cancel_job(&self, project_id: &str, job_id: &str) -> Result<()> {
        let url = format!(
            "{}/projects/{}/jobs/{}:cancel",
            self.base_url, project_id, job_id
        );
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
