//! Submission sink settings

use serde::{Deserialize, Serialize};

/// Which submission sink implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionProvider {
    /// POST the registration to `endpoint`
    Http,
    /// Record submissions in memory
    #[default]
    Mock,
}

/// Registration backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub provider: SubmissionProvider,

    /// Registration endpoint used by the HTTP sink
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Attempts before giving up on a retryable failure (at least one is made)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial delay between attempts in milliseconds, doubled each retry
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            provider: SubmissionProvider::default(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

impl SubmissionConfig {
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self {
            provider: SubmissionProvider::Http,
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

fn default_endpoint() -> String {
    String::from("http://localhost:8080/api/v1/workers/register")
}

fn default_timeout() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    500
}
