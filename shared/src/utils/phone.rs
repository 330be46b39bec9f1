//! Phone number utilities for Pakistani mobile numbers

use once_cell::sync::Lazy;
use regex::Regex;

// Local mobile format: 03XX followed by seven digits
static LOCAL_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^03\d{9}$").expect("static regex")
});

// International mobile format with or without the leading plus
static INTERNATIONAL_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?923\d{9}$").expect("static regex")
});

/// Country calling code for Pakistan
pub const COUNTRY_CODE: &str = "+92";

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid local mobile number (e.g. 0300-1234567)
pub fn is_valid_local_mobile(phone: &str) -> bool {
    LOCAL_MOBILE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Check if a phone number is a valid mobile number in international form
pub fn is_valid_international_mobile(phone: &str) -> bool {
    INTERNATIONAL_MOBILE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Check if a phone number is a valid mobile number in either form
pub fn is_valid_mobile(phone: &str) -> bool {
    is_valid_local_mobile(phone) || is_valid_international_mobile(phone)
}

/// Convert a valid mobile number to E.164 (`+923001234567`)
pub fn to_e164(phone: &str) -> Option<String> {
    let normalized = normalize_phone_number(phone);
    if LOCAL_MOBILE_REGEX.is_match(&normalized) {
        Some(format!("{}{}", COUNTRY_CODE, &normalized[1..]))
    } else if INTERNATIONAL_MOBILE_REGEX.is_match(&normalized) {
        let digits = normalized.trim_start_matches('+');
        Some(format!("+{}", digits))
    } else {
        None
    }
}

/// Format a mobile number for display in the local `03XX-XXXXXXX` shape
pub fn format_local_mobile(phone: &str) -> Option<String> {
    let e164 = to_e164(phone)?;
    // "+92" + "3XXXXXXXXX"
    let national = &e164[3..];
    Some(format!("0{}-{}", &national[..3], &national[3..]))
}

/// Mask a phone number for display (e.g., 030****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("0300-1234567"), "03001234567");
        assert_eq!(normalize_phone_number("+92 300 1234567"), "+923001234567");
        assert_eq!(normalize_phone_number("(0300) 123-4567"), "03001234567");
    }

    #[test]
    fn test_is_valid_local_mobile() {
        assert!(is_valid_local_mobile("0300-1234567"));
        assert!(is_valid_local_mobile("03451234567"));
        assert!(!is_valid_local_mobile("0400-1234567")); // Not a mobile prefix
        assert!(!is_valid_local_mobile("0300-123456")); // Too short
        assert!(!is_valid_local_mobile("0300-12345678")); // Too long
    }

    #[test]
    fn test_is_valid_international_mobile() {
        assert!(is_valid_international_mobile("+923001234567"));
        assert!(is_valid_international_mobile("923001234567"));
        assert!(!is_valid_international_mobile("+913001234567"));
        assert!(is_valid_mobile("+92 300 1234567"));
        assert!(!is_valid_mobile("12345"));
    }

    #[test]
    fn test_to_e164() {
        assert_eq!(to_e164("0300-1234567"), Some("+923001234567".to_string()));
        assert_eq!(to_e164("923001234567"), Some("+923001234567".to_string()));
        assert_eq!(to_e164("invalid"), None);
    }

    #[test]
    fn test_format_local_mobile() {
        assert_eq!(
            format_local_mobile("+923001234567"),
            Some("0300-1234567".to_string())
        );
        assert_eq!(format_local_mobile("0400"), None);
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("03001234567"), "030****4567");
        assert_eq!(mask_phone_number("+923001234567"), "+92****4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
