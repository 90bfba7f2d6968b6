//! Error types for the component operations

use mljob_core::domain::job::JobState;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;

/// Errors that can surface from a component operation
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The job API call failed; passed through unchanged
    #[error(transparent)]
    Client(#[from] mljob_client::ClientError),

    /// The job reached a terminal state other than SUCCEEDED
    #[error("job {job_id} finished with state {state}: {message}")]
    JobFailed {
        /// ID of the job
        job_id: String,
        /// The terminal state (FAILED or CANCELLED)
        state: JobState,
        /// The API's `errorMessage`, or "" when it carries none
        message: String,
    },

    /// Writing an output artifact failed
    #[error("failed to write output artifact {path}: {source}")]
    Output {
        /// Path of the artifact
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the job payload failed
    #[error("failed to serialize job payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
