//! Common validation utilities

use serde::Serialize;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single strength rule a password failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl PasswordRule {
    pub fn description(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "at least 8 characters",
            PasswordRule::Uppercase => "an uppercase letter",
            PasswordRule::Lowercase => "a lowercase letter",
            PasswordRule::Digit => "a digit",
            PasswordRule::Symbol => "a symbol",
        }
    }
}

/// Check a password against the signup strength rules
///
/// Returns every rule the password fails, in a stable order.
pub fn validate_password(password: &str) -> Result<(), Vec<PasswordRule>> {
    let mut failed = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        failed.push(PasswordRule::MinLength);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        failed.push(PasswordRule::Uppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        failed.push(PasswordRule::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failed.push(PasswordRule::Digit);
    }
    if !password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        failed.push(PasswordRule::Symbol);
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(failed)
    }
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check that every character is an ASCII digit and the count is exact
    pub fn is_numeric_code(value: &str, length: usize) -> bool {
        value.len() == length && value.chars().all(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_strong_password_passes() {
        assert!(validate_password("Secret1!").is_ok());
        assert!(validate_password("C0rrect-Horse").is_ok());
    }

    #[test]
    fn test_weak_password_reports_all_rules() {
        let failed = validate_password("abc").unwrap_err();
        assert_eq!(
            failed,
            vec![
                PasswordRule::MinLength,
                PasswordRule::Uppercase,
                PasswordRule::Digit,
                PasswordRule::Symbol,
            ]
        );
    }

    #[test]
    fn test_password_missing_symbol() {
        assert_eq!(
            validate_password("Secret123").unwrap_err(),
            vec![PasswordRule::Symbol]
        );
    }

    #[test]
    fn test_validators() {
        assert!(not_empty(" Bilal "));
        assert!(!not_empty("   "));
        assert!(length_between("abc", 1, 3));
        assert!(!length_between("abcd", 1, 3));
        assert!(is_numeric_code("123456", 6));
        assert!(!is_numeric_code("12345a", 6));
        assert!(!is_numeric_code("12345", 6));
    }
}
