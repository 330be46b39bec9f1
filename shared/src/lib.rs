//! Shared utilities and common types for the worker signup workspace
//!
//! This crate provides common functionality used across all modules:
//! - Configuration types
//! - Error response structures
//! - Utility predicates (phone, password and CNIC validation)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    Environment, LoggingConfig, SignupConfig, SubmissionConfig, SubmissionProvider, WizardConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Coordinate, Language};
pub use utils::{cnic, phone, validation};
