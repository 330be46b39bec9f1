//! Common utility functions

pub mod cnic;
pub mod phone;
pub mod validation;

// Re-export commonly used utilities
pub use cnic::{format_cnic, is_valid_cnic};
pub use phone::{is_valid_mobile, mask_phone_number, to_e164};
pub use validation::{validate_password, PasswordRule};
