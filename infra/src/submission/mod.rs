//! Submission Sink Module
//!
//! Implementations of the wizard's registration sink.
//!
//! ## Features
//!
//! - **HTTP sink**: JSON POST to the registration backend with retry
//! - **Mock sink**: in-memory recording for development and tests
//! - **Factory**: picks the sink from `SubmissionConfig`

use std::sync::Arc;

use re_core::services::submission::SubmissionSink;
use re_shared::{SubmissionConfig, SubmissionProvider};
use tracing::info;

use crate::InfrastructureError;

pub mod http;
pub mod mock;

pub use http::HttpSubmissionSink;
pub use mock::MockSubmissionSink;

#[cfg(test)]
mod tests;

/// Create a submission sink based on configuration
pub fn create_submission_sink(
    config: &SubmissionConfig,
) -> Result<Arc<dyn SubmissionSink>, InfrastructureError> {
    let sink: Arc<dyn SubmissionSink> = match config.provider {
        SubmissionProvider::Http => Arc::new(HttpSubmissionSink::new(config)?),
        SubmissionProvider::Mock => Arc::new(MockSubmissionSink::new()),
    };

    info!(provider = sink.name(), "Submission sink created");
    Ok(sink)
}
