//! Outcomes and signals produced by the wizard controller.

use serde::Serialize;

use crate::services::submission::SubmissionReceipt;

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    /// Accepting edits and navigation
    Collecting,
    /// Waiting on the submission sink
    Submitting,
    /// Terminal: the registration was accepted
    Submitted,
}

/// Side effects the presentation layer should carry out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardSignal {
    /// A step was left forwards
    ScrollToTop,
    /// A one-time code should be sent to this number
    CodeRequested { phone: String },
    /// Leave the wizard
    NavigateTo { route: String },
    /// The live camera preview is gone
    CameraReleased,
}

/// Result of trying to move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Now on the given 1-based step
    Advanced { step: usize },
    /// Validation failed; the error map holds the failing fields
    Blocked { invalid_fields: usize },
    /// Already on the last step, submit instead
    MustSubmit,
}

/// Result of trying to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubmissionReceipt),
    /// Validation of the last step failed
    Blocked { invalid_fields: usize },
    /// The sink refused or could not be reached; data is kept for a retry
    Failed { message: String },
}

/// Whether a field edit changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The edit was not meaningful (a non-digit code key, removing an
    /// unselected service) and the store is unchanged
    Ignored,
}
