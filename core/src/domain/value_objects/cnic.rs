//! Formatted CNIC number value object.

use re_shared::cnic::{format_cnic, is_valid_cnic};
use serde::{Deserialize, Serialize};

/// A CNIC number as displayed and stored: digits grouped 5-7-1 with the
/// dashes inserted while typing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CnicNumber(String);

impl CnicNumber {
    /// Build from whatever the user typed
    pub fn from_input(input: &str) -> Self {
        Self(format_cnic(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All thirteen digits present in the 5-7-1 shape
    pub fn is_complete(&self) -> bool {
        is_valid_cnic(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digits only, without the group separators
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl From<String> for CnicNumber {
    fn from(value: String) -> Self {
        Self::from_input(&value)
    }
}

impl From<CnicNumber> for String {
    fn from(value: CnicNumber) -> Self {
        value.0
    }
}
