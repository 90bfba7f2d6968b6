//! ML Engine HTTP Client
//!
//! A simple, type-safe HTTP client for the Cloud ML Engine v1 job API.
//!
//! This crate provides the job-API binding shared by the pipeline component
//! operations and the CLI, so both talk to the service the same way.
//!
//! Credential handling is deliberately out of scope: pass a pre-configured
//! `reqwest::Client` (e.g. one that injects an authorization header) via
//! [`MlEngineClient::with_parts`] when the deployment requires it.
//!
//! # Example
//!
//! ```no_run
//! use mljob_client::MlEngineClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MlEngineClient::new();
//!
//!     let job = client.get_job("my-project", "train_mnist_20260807").await?;
//!     println!("Job {} is {}", job.job_id, job.state);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use mljob_core::domain::job::{Job, JobState};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Production endpoint of the ML Engine v1 REST API
pub const DEFAULT_ENDPOINT: &str = "https://ml.googleapis.com/v1";

/// HTTP client for the ML Engine job API
///
/// This client provides methods for the `projects.jobs` endpoints the
/// pipeline components consume:
/// - Job lookup (get)
/// - Job cancellation
#[derive(Debug, Clone)]
pub struct MlEngineClient {
    /// Base URL of the API (e.g., "https://ml.googleapis.com/v1")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl Default for MlEngineClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MlEngineClient {
    /// Create a client against the production endpoint
    ///
    /// # Example
    /// ```
    /// use mljob_client::MlEngineClient;
    ///
    /// let client = MlEngineClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint
    ///
    /// Useful for emulators and tests.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:8080/v1")
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom endpoint and HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, or an
    /// authorization layer.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use mljob_client::MlEngineClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = MlEngineClient::with_parts("https://ml.googleapis.com/v1", http_client);
    /// ```
    pub fn with_parts(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body carries nothing of interest
    /// (e.g. the cancel endpoint, which answers with an empty object)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MlEngineClient::new();
        assert_eq!(client.base_url(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = MlEngineClient::with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = MlEngineClient::with_parts("http://localhost:8080/v1", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }
}
