//! Domain entities for the signup flow.

pub mod field_store;
pub mod registration;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use field_store::{
    ExperienceFields, FieldStore, IdentityDocumentFields, IdentityFields, LocationFields,
};
pub use registration::WorkerRegistration;
