//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body exchanged with the registration backend
///
/// The submission sink decodes this shape from non-success responses to
/// surface a single general error to the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message (localized by the backend)
    pub message: String,

    /// Field-scoped messages, when the backend rejected specific fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,

    /// Timestamp when the error occurred
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            field_errors: BTreeMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Attach a field-scoped message
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors.insert(field.into(), message.into());
        self
    }

    /// Message to show when only one line fits: the general message, or the
    /// first field message if the general one is blank
    pub fn summary(&self) -> &str {
        if !self.message.trim().is_empty() {
            return &self.message;
        }
        self.field_errors
            .values()
            .next()
            .map(String::as_str)
            .unwrap_or(self.error.as_str())
    }
}

/// Common error codes used across the workspace
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const SUBMISSION_REJECTED: &str = "SUBMISSION_REJECTED";
    pub const SUBMISSION_FAILED: &str = "SUBMISSION_FAILED";
    pub const PHONE_INVALID: &str = "PHONE_INVALID";
    pub const PHONE_ALREADY_REGISTERED: &str = "PHONE_ALREADY_REGISTERED";
    pub const CNIC_INVALID: &str = "CNIC_INVALID";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prefers_message() {
        let response = ErrorResponse::new(error_codes::SUBMISSION_REJECTED, "Phone already registered")
            .with_field_error("phone", "taken");
        assert_eq!(response.summary(), "Phone already registered");
    }

    #[test]
    fn test_summary_falls_back_to_field_then_code() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, " ")
            .with_field_error("cnic", "CNIC does not match our records");
        assert_eq!(response.summary(), "CNIC does not match our records");

        let bare = ErrorResponse::new(error_codes::INTERNAL_ERROR, "");
        assert_eq!(bare.summary(), error_codes::INTERNAL_ERROR);
    }

    #[test]
    fn test_deserialize_without_timestamp() {
        let json = r#"{"error":"PHONE_ALREADY_REGISTERED","message":"This number is already registered"}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error, error_codes::PHONE_ALREADY_REGISTERED);
        assert!(response.field_errors.is_empty());
    }
}
