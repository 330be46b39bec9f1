//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{DeviceError, DeviceKind, GeocodingError, SubmissionError, WizardError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to specific error types
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_error_bridges_transparently() {
        let error: DomainError = WizardError::PhotoLimitReached { max: 6 }.into();
        assert_eq!(error.to_string(), "Photo limit reached: at most 6 photos");
        assert!(matches!(error, DomainError::Wizard(WizardError::PhotoLimitReached { .. })));
    }

    #[test]
    fn test_device_error_display() {
        let error: DomainError = DeviceError::PermissionDenied {
            device: DeviceKind::Camera,
        }
        .into();
        assert_eq!(error.to_string(), "Permission denied for camera");
    }

    #[test]
    fn test_submission_error_message() {
        let error = SubmissionError::Rejected {
            message: "Phone already registered".to_string(),
        };
        assert_eq!(error.user_message(), Some("Phone already registered"));

        let error = SubmissionError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.user_message(), None);
    }
}
