//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// ML Engine training/prediction job resource
///
/// Mirrors the `projects.jobs` payload of the ML Engine v1 REST API.
/// Fields this workspace never inspects are preserved verbatim in `extra`
/// so a job fetched from the API serializes back to the same payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: String,
    #[serde(default, skip_serializing_if = "JobState::is_unspecified")]
    pub state: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Populated by the API when the job reaches FAILED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_input: Option<TrainingInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_input: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_output: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    /// The job's output directory (`trainingInput.jobDir`), or "" when the
    /// job does not carry one (e.g. prediction jobs).
    pub fn job_dir(&self) -> &str {
        self.training_input
            .as_ref()
            .and_then(|input| input.job_dir.as_deref())
            .unwrap_or("")
    }
}

/// Job lifecycle state, as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    #[default]
    StateUnspecified,
    Queued,
    Preparing,
    Running,
    Succeeded,
    Failed,
    Cancelling,
    Cancelled,
}

impl JobState {
    /// The wire name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::StateUnspecified => "STATE_UNSPECIFIED",
            JobState::Queued => "QUEUED",
            JobState::Preparing => "PREPARING",
            JobState::Running => "RUNNING",
            JobState::Succeeded => "SUCCEEDED",
            JobState::Failed => "FAILED",
            JobState::Cancelling => "CANCELLING",
            JobState::Cancelled => "CANCELLED",
        }
    }

    /// True for states from which the job cannot transition further
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Succeeded | JobState::Failed | JobState::Cancelled
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, JobState::Succeeded)
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, JobState::StateUnspecified)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input parameters of a training job
///
/// Only `jobDir` is consumed here; everything else rides along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_dir: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "jobId": "train_mnist_20260807",
            "state": "SUCCEEDED",
            "createTime": "2026-08-07T10:00:00Z",
            "startTime": "2026-08-07T10:01:30Z",
            "endTime": "2026-08-07T11:45:02Z",
            "trainingInput": {
                "jobDir": "gs://ml-bucket/jobs/train_mnist_20260807",
                "region": "us-central1",
                "scaleTier": "BASIC_GPU"
            },
            "trainingOutput": {
                "consumedMLUnits": 1.52
            },
            "etag": "qL0boDhtSZw="
        })
    }

    #[test]
    fn test_parse_job_payload() {
        let job: Job = serde_json::from_value(sample_payload()).unwrap();
        assert_eq!(job.job_id, "train_mnist_20260807");
        assert_eq!(job.state, JobState::Succeeded);
        assert_eq!(job.job_dir(), "gs://ml-bucket/jobs/train_mnist_20260807");
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let payload = sample_payload();
        let job: Job = serde_json::from_value(payload.clone()).unwrap();
        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_job_dir_defaults_to_empty() {
        let job: Job = serde_json::from_value(json!({
            "jobId": "batch_predict_1",
            "state": "RUNNING",
            "predictionInput": { "dataFormat": "JSON" }
        }))
        .unwrap();
        assert_eq!(job.job_dir(), "");
    }

    #[test]
    fn test_state_defaults_to_unspecified() {
        let job: Job = serde_json::from_value(json!({ "jobId": "fresh" })).unwrap();
        assert_eq!(job.state, JobState::StateUnspecified);
        assert!(!job.state.is_terminal());
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobState::Succeeded.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(JobState::Cancelled.is_terminal());
        assert!(!JobState::Queued.is_terminal());
        assert!(!JobState::Preparing.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(!JobState::Cancelling.is_terminal());
    }

    #[test]
    fn test_state_wire_names() {
        assert_eq!(
            serde_json::to_value(JobState::Cancelling).unwrap(),
            json!("CANCELLING")
        );
        let state: JobState = serde_json::from_value(json!("PREPARING")).unwrap();
        assert_eq!(state, JobState::Preparing);
        assert_eq!(state.to_string(), "PREPARING");
    }
}
