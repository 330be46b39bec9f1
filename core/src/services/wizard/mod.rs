//! Signup wizard module
//!
//! This module provides the multi-step worker signup flow:
//! - An ordered step registry with per-step field ownership
//! - Per-step validation rendered into a localized error map
//! - The wizard controller owning the field store
//! - The one-time code resend countdown

mod controller;
mod countdown;
mod edit;
mod error_map;
mod messages;
mod registry;
mod types;
mod validator;

#[cfg(test)]
mod tests;

pub use controller::WizardController;
pub use countdown::ResendCountdown;
pub use edit::FieldEdit;
pub use error_map::{ErrorMap, FieldError};
pub use messages::{message, MessageKey};
pub use registry::{StepDefinition, StepId, StepRegistry, StepRule};
pub use types::{AdvanceOutcome, EditOutcome, SubmitOutcome, WizardPhase, WizardSignal};
pub use validator::{FieldIssue, Validator};
