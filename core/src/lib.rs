//! # Worker Signup Core
//!
//! Domain layer of the worker signup wizard: the field store and its value
//! objects, the step registry and validator, the wizard controller, and the
//! collaborator traits (camera, geocoding, submission) implemented by infra.

pub mod domain;
pub mod services;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use errors::*;
