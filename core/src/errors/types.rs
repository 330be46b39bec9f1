//! Error types for the signup wizard and its external collaborators
//!
//! Field-level validation problems are not errors here: they are reported
//! through the wizard's error map. These types cover misuse of the controller
//! and failures of devices, geocoding and submission.

use thiserror::Error;

/// Controller and field-store misuse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Step {index} is out of range (1..={count})")]
    StepOutOfRange { index: usize, count: usize },

    #[error("Submit is only available on the last step (current: {current}, last: {last})")]
    NotOnLastStep { current: usize, last: usize },

    #[error("Operation requires the {expected} step")]
    NotOnStep { expected: String },

    #[error("Submission already in progress")]
    SubmissionInProgress,

    #[error("Registration already submitted")]
    AlreadySubmitted,

    #[error("Photo limit reached: at most {max} photos")]
    PhotoLimitReached { max: usize },

    #[error("No photo at index {index} (have {len})")]
    PhotoIndexOutOfRange { index: usize, len: usize },

    #[error("Camera is not active")]
    CameraNotActive,

    #[error("Resend available in {remaining_seconds} seconds")]
    ResendCooldown { remaining_seconds: u32 },

    #[error("Step registry must contain at least one step")]
    EmptyRegistry,

    #[error("Code box {position} holds {value}, not a digit")]
    InvalidCodeDigit { position: usize, value: u8 },

    #[error("Invalid years of experience: {value}")]
    InvalidExperienceYears { value: u8 },

    #[error("Service {service_id} has no sub-services selected")]
    EmptyServiceEntry { service_id: String },
}

/// Devices the wizard can request access to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Camera,
    Geolocation,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Camera => write!(f, "camera"),
            DeviceKind::Geolocation => write!(f, "geolocation"),
        }
    }
}

/// Camera and geolocation failures
///
/// Always recoverable: the step stays in its pre-capture state so the user
/// can retry or fall back to upload/manual entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Permission denied for {device}")]
    PermissionDenied { device: DeviceKind },

    #[error("{device} unavailable: {reason}")]
    Unavailable { device: DeviceKind, reason: String },

    #[error("Frame capture failed: {reason}")]
    CaptureFailed { reason: String },
}

/// Address lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodingError {
    #[error("No results for '{query}'")]
    NoResults { query: String },

    #[error("Unknown suggestion: {id}")]
    UnknownSuggestion { id: String },

    #[error("Geocoding provider error: {message}")]
    Provider { message: String },
}

/// Submission sink failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The backend answered and refused the registration
    #[error("Registration rejected: {message}")]
    Rejected { message: String },

    /// The backend could not be reached or did not answer in time
    #[error("Network error: {message}")]
    Network { message: String },

    /// The registration could not be encoded for transport
    #[error("Encoding error: {message}")]
    Encoding { message: String },
}

impl SubmissionError {
    /// Message suitable for showing to the user verbatim, if the backend sent one
    pub fn user_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Rejected { message } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
