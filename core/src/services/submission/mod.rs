//! Submission sink receiving completed registrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::WorkerRegistration;
use crate::errors::SubmissionError;

/// Acknowledgement returned by a sink that accepted a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub registration_id: String,
    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(registration_id: impl Into<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// Destination for completed registrations
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver the registration; an error leaves the wizard able to retry
    async fn submit(&self, registration: &WorkerRegistration) -> Result<SubmissionReceipt, SubmissionError>;

    /// Name used in logs
    fn name(&self) -> &str;
}
