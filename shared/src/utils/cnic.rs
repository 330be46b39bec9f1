//! Identity document (CNIC) formatting and validation
//!
//! A CNIC is thirteen digits grouped 5-7-1, e.g. `12345-1234567-1`.

use once_cell::sync::Lazy;
use regex::Regex;

static CNIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{5}-\d{7}-\d$").expect("static regex")
});

/// Number of digits in a CNIC
pub const CNIC_DIGITS: usize = 13;

/// Format raw keyboard input into the grouped CNIC shape
///
/// Non-digits are dropped, input beyond thirteen digits is truncated and the
/// dashes are inserted as soon as the following group starts.
pub fn format_cnic(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(CNIC_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(CNIC_DIGITS + 2);
    for (i, digit) in digits.chars().enumerate() {
        if i == 5 || i == 12 {
            formatted.push('-');
        }
        formatted.push(digit);
    }
    formatted
}

/// Check that a value is a fully formatted CNIC
pub fn is_valid_cnic(value: &str) -> bool {
    CNIC_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_cnic() {
        assert_eq!(format_cnic("1234512345671"), "12345-1234567-1");
    }

    #[test]
    fn test_format_truncates_extra_digits() {
        assert_eq!(format_cnic("123451234567189"), "12345-1234567-1");
    }

    #[test]
    fn test_format_partial_input() {
        assert_eq!(format_cnic(""), "");
        assert_eq!(format_cnic("1234"), "1234");
        assert_eq!(format_cnic("12345"), "12345");
        assert_eq!(format_cnic("123451"), "12345-1");
        assert_eq!(format_cnic("123451234567"), "12345-1234567");
    }

    #[test]
    fn test_format_is_idempotent_on_formatted_input() {
        assert_eq!(format_cnic("12345-1234567-1"), "12345-1234567-1");
        assert_eq!(format_cnic("12345-12ab"), "12345-12");
    }

    #[test]
    fn test_is_valid_cnic() {
        assert!(is_valid_cnic("12345-1234567-1"));
        assert!(!is_valid_cnic("1234512345671"));
        assert!(!is_valid_cnic("12345-1234567"));
        assert!(!is_valid_cnic("12345-123456-12"));
    }
}
