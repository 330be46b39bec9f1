//! Business services driving the signup wizard.

pub mod camera;
pub mod location;
pub mod submission;
pub mod wizard;

// Re-export commonly used types
pub use camera::{CameraDevice, CameraSession, MediaStream};
pub use location::{Geocoder, LocationProvider, PopularCity, Suggestion};
pub use submission::{SubmissionReceipt, SubmissionSink};
pub use wizard::{
    message, FieldError, FieldIssue, StepRule,
    AdvanceOutcome, EditOutcome, ErrorMap, FieldEdit, MessageKey, ResendCountdown,
    StepDefinition, StepId, StepRegistry, SubmitOutcome, Validator, WizardController,
    WizardPhase, WizardSignal,
};
