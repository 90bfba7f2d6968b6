//! Configuration module
//!
//! Handles CLI configuration shared by all subcommands.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ML Engine API
    pub endpoint: String,
}
