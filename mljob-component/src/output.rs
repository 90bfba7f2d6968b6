//! Output artifacts for downstream pipeline steps
//!
//! A component communicates its results to the rest of the pipeline
//! through small files at well-known paths. The defaults are fixed by the
//! pipeline contract; tests inject a scratch directory.

use std::fs;
use std::path::PathBuf;

use mljob_core::domain::job::Job;
use tracing::info;

use crate::error::{ComponentError, Result};

/// Default directory for the job artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/kfp/output/ml_engine";

/// Default path of the pipeline UI metadata file
pub const DEFAULT_UI_METADATA_PATH: &str = "/mlpipeline-ui-metadata.json";

/// Writes the component's output artifacts
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
    ui_metadata_path: PathBuf,
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_UI_METADATA_PATH)
    }
}

impl OutputWriter {
    /// Create a writer with explicit artifact locations
    ///
    /// # Arguments
    /// * `output_dir` - Directory receiving `job.json`, `job_id.txt`, `job_dir.txt`
    /// * `ui_metadata_path` - Path of the pipeline UI metadata file
    pub fn new(output_dir: impl Into<PathBuf>, ui_metadata_path: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ui_metadata_path: ui_metadata_path.into(),
        }
    }

    /// Write `job.json`, `job_id.txt` and `job_dir.txt` for `job`
    ///
    /// `job.json` is the job's serialized payload; `job_dir.txt` is ""
    /// when the job carries no output directory.
    pub fn write_job(&self, job: &Job) -> Result<()> {
        let payload = serde_json::to_string(job)?;
        self.dump_file(self.output_dir.join("job.json"), &payload)?;
        self.dump_file(self.output_dir.join("job_id.txt"), &job.job_id)?;
        self.dump_file(self.output_dir.join("job_dir.txt"), job.job_dir())?;
        Ok(())
    }

    /// Write the pipeline UI metadata pointing a tensorboard at `job_dir`
    pub fn write_tensorboard_metadata(&self, job_dir: &str) -> Result<()> {
        let metadata = serde_json::json!({
            "outputs": [{
                "type": "tensorboard",
                "source": job_dir,
            }]
        });
        self.dump_file(self.ui_metadata_path.clone(), &metadata.to_string())
    }

    /// Write `content` to `path`, creating parent directories as needed
    fn dump_file(&self, path: PathBuf, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ComponentError::Output {
                path: path.clone(),
                source: e,
            })?;
        }

        info!("Dumping file {}", path.display());
        fs::write(&path, content).map_err(|e| ComponentError::Output { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn writer_in(dir: &tempfile::TempDir) -> OutputWriter {
        OutputWriter::new(
            dir.path().join("ml_engine"),
            dir.path().join("mlpipeline-ui-metadata.json"),
        )
    }

    fn training_job() -> Job {
        serde_json::from_value(json!({
            "jobId": "train_42",
            "state": "SUCCEEDED",
            "trainingInput": { "jobDir": "gs://bucket/train_42" }
        }))
        .unwrap()
    }

    #[test]
    fn test_write_job_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(&dir);
        let job = training_job();

        writer.write_job(&job).unwrap();

        let payload = fs::read_to_string(dir.path().join("ml_engine/job.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, serde_json::to_value(&job).unwrap());

        let job_id = fs::read_to_string(dir.path().join("ml_engine/job_id.txt")).unwrap();
        assert_eq!(job_id, "train_42");

        let job_dir = fs::read_to_string(dir.path().join("ml_engine/job_dir.txt")).unwrap();
        assert_eq!(job_dir, "gs://bucket/train_42");
    }

    #[test]
    fn test_job_dir_artifact_is_empty_without_training_input() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(&dir);
        let job: Job =
            serde_json::from_value(json!({ "jobId": "predict_1", "state": "SUCCEEDED" })).unwrap();

        writer.write_job(&job).unwrap();

        let job_dir = fs::read_to_string(dir.path().join("ml_engine/job_dir.txt")).unwrap();
        assert_eq!(job_dir, "");
    }

    #[test]
    fn test_write_tensorboard_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(&dir);

        writer
            .write_tensorboard_metadata("gs://bucket/train_42")
            .unwrap();

        let metadata = fs::read_to_string(dir.path().join("mlpipeline-ui-metadata.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&metadata).unwrap();
        assert_eq!(
            parsed,
            json!({
                "outputs": [{ "type": "tensorboard", "source": "gs://bucket/train_42" }]
            })
        );
    }

    #[test]
    fn test_rewriting_artifacts_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(&dir);
        let job = training_job();

        writer.write_job(&job).unwrap();
        let first = fs::read_to_string(dir.path().join("ml_engine/job.json")).unwrap();
        writer.write_job(&job).unwrap();
        let second = fs::read_to_string(dir.path().join("ml_engine/job.json")).unwrap();

        assert_eq!(first, second);
    }
}
