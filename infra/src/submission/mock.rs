//! Mock Submission Sink
//!
//! Accepts registrations in memory instead of sending them anywhere. Used in
//! development so the wizard can be driven end to end without a backend.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use re_core::errors::SubmissionError;
use re_core::services::submission::{SubmissionReceipt, SubmissionSink};
use re_core::WorkerRegistration;
use re_shared::phone::mask_phone_number;
use tracing::{info, warn};
use uuid::Uuid;

/// In-memory registration sink
///
/// This implementation:
/// - Records every accepted registration
/// - Generates mock registration IDs
/// - Can be told to fail the next submissions
/// - Optionally prints a summary to the console
#[derive(Clone)]
pub struct MockSubmissionSink {
    received: Arc<Mutex<Vec<WorkerRegistration>>>,
    failure: Arc<Mutex<Option<SubmissionError>>>,
    console_output: bool,
}

impl MockSubmissionSink {
    pub fn new() -> Self {
        Self::with_options(true)
    }

    pub fn with_options(console_output: bool) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            console_output,
        }
    }

    /// Fail every following submission with `error` until cleared
    pub fn fail_with(&self, error: SubmissionError) {
        *lock(&self.failure) = Some(error);
    }

    /// Accept submissions again
    pub fn clear_failure(&self) {
        *lock(&self.failure) = None;
    }

    /// Number of accepted registrations
    pub fn count(&self) -> usize {
        lock(&self.received).len()
    }

    /// Copies of the accepted registrations, oldest first
    pub fn registrations(&self) -> Vec<WorkerRegistration> {
        lock(&self.received).clone()
    }

    pub fn reset(&self) {
        lock(&self.received).clear();
    }
}

impl Default for MockSubmissionSink {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl SubmissionSink for MockSubmissionSink {
    async fn submit(&self, registration: &WorkerRegistration) -> Result<SubmissionReceipt, SubmissionError> {
        let masked_phone = mask_phone_number(&registration.phone);

        let failure = lock(&self.failure).clone();
        if let Some(error) = failure {
            warn!(
                target: "submission",
                provider = "mock",
                phone = %masked_phone,
                "Mock sink simulating failure: {}",
                error
            );
            return Err(error);
        }

        let receipt = SubmissionReceipt::new(format!("mock_{}", Uuid::new_v4()));
        let count = {
            let mut received = lock(&self.received);
            received.push(registration.clone());
            received.len()
        };

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SUBMISSION - REGISTRATION #{}", count);
            println!("{}", "=".repeat(60));
            println!("Name: {}", registration.full_name);
            println!("Phone: {}", masked_phone);
            println!("Services: {}", registration.services.len());
            println!("Address: {}", registration.address);
            println!("Registration ID: {}", receipt.registration_id);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "submission",
            provider = "mock",
            phone = %masked_phone,
            registration_id = %receipt.registration_id,
            "[MOCK] Registration accepted"
        );

        Ok(receipt)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
