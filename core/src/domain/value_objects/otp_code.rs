//! One-time code collected digit by digit.

use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

/// Length of the one-time verification code
pub const CODE_LENGTH: usize = 6;

/// A fixed-length code entry with per-box digits and a focus cursor
///
/// Non-digit keystrokes are rejected at entry time, so the stored value only
/// ever contains ASCII digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredCode")]
pub struct OtpCode {
    digits: [Option<u8>; CODE_LENGTH],
    focus: usize,
}

impl OtpCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter one keystroke into the box at `position`
    ///
    /// Returns `false` when the keystroke is rejected (not a digit, or the
    /// position does not exist). On success focus moves to the next box.
    pub fn enter_digit(&mut self, position: usize, key: char) -> bool {
        if position >= CODE_LENGTH {
            return false;
        }
        if !key.is_ascii_digit() {
            return false;
        }
        let Some(value) = key.to_digit(10) else {
            return false;
        };

        self.digits[position] = Some(value as u8);
        self.focus = (position + 1).min(CODE_LENGTH - 1);
        true
    }

    /// Backspace in the box at `position`
    ///
    /// Clears that box if it holds a digit, otherwise moves focus to the
    /// previous box and clears it.
    pub fn backspace(&mut self, position: usize) -> bool {
        if position >= CODE_LENGTH {
            return false;
        }
        if self.digits[position].is_some() {
            self.digits[position] = None;
            self.focus = position;
        } else if position > 0 {
            self.digits[position - 1] = None;
            self.focus = position - 1;
        } else {
            self.focus = 0;
        }
        true
    }

    /// Paste a whole code
    ///
    /// Accepted only if every character is a digit; fills boxes from the
    /// start and ignores anything past the code length.
    pub fn paste(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        self.digits = [None; CODE_LENGTH];
        let mut filled = 0;
        for (slot, c) in self.digits.iter_mut().zip(text.chars()) {
            *slot = c.to_digit(10).map(|d| d as u8);
            filled += 1;
        }
        self.focus = filled.min(CODE_LENGTH - 1);
        true
    }

    /// Reset every box and return focus to the first one
    pub fn clear(&mut self) {
        self.digits = [None; CODE_LENGTH];
        self.focus = 0;
    }

    /// Concatenation of the entered digits, skipping empty boxes
    pub fn value(&self) -> String {
        self.digits
            .iter()
            .flatten()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    pub fn digit(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied().flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == CODE_LENGTH
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Box that should hold keyboard focus
    pub fn focus(&self) -> usize {
        self.focus
    }
}

/// Serialized shape, checked before it becomes an [`OtpCode`]
#[derive(Deserialize)]
struct StoredCode {
    digits: [Option<u8>; CODE_LENGTH],
    #[serde(default)]
    focus: usize,
}

impl TryFrom<StoredCode> for OtpCode {
    type Error = WizardError;

    fn try_from(stored: StoredCode) -> Result<Self, Self::Error> {
        for (position, digit) in stored.digits.iter().enumerate() {
            if let Some(value) = *digit {
                if value > 9 {
                    return Err(WizardError::InvalidCodeDigit { position, value });
                }
            }
        }
        Ok(Self {
            digits: stored.digits,
            focus: stored.focus.min(CODE_LENGTH - 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_digits_auto_advances_focus() {
        let mut code = OtpCode::new();
        assert!(code.enter_digit(0, '1'));
        assert_eq!(code.focus(), 1);
        assert!(code.enter_digit(1, '2'));
        assert_eq!(code.focus(), 2);
        assert_eq!(code.value(), "12");
    }

    #[test]
    fn test_focus_stays_on_last_box() {
        let mut code = OtpCode::new();
        for (i, c) in "123456".chars().enumerate() {
            assert!(code.enter_digit(i, c));
        }
        assert_eq!(code.focus(), CODE_LENGTH - 1);
        assert!(code.is_complete());
        assert_eq!(code.value(), "123456");
    }

    #[test]
    fn test_non_digit_rejected_at_entry() {
        let mut code = OtpCode::new();
        assert!(!code.enter_digit(0, 'a'));
        assert!(!code.enter_digit(0, '٣')); // Arabic-Indic digit
        assert!(!code.enter_digit(CODE_LENGTH, '1'));
        assert!(code.is_empty());
        assert_eq!(code.focus(), 0);
    }

    #[test]
    fn test_backspace_on_empty_box_moves_back() {
        let mut code = OtpCode::new();
        code.enter_digit(0, '1');
        code.enter_digit(1, '2');
        // Focus is on box 2, which is empty
        assert!(code.backspace(2));
        assert_eq!(code.value(), "1");
        assert_eq!(code.focus(), 1);

        assert!(code.backspace(0));
        assert!(code.is_empty());
        assert_eq!(code.focus(), 0);
    }

    #[test]
    fn test_paste() {
        let mut code = OtpCode::new();
        assert!(!code.paste("12a456"));
        assert!(code.is_empty());

        assert!(code.paste(" 1234567 "));
        assert_eq!(code.value(), "123456");

        assert!(code.paste("123"));
        assert_eq!(code.value(), "123");
        assert_eq!(code.focus(), 3);
    }

    #[test]
    fn test_clear() {
        let mut code = OtpCode::new();
        code.paste("123456");
        code.clear();
        assert!(code.is_empty());
        assert_eq!(code.focus(), 0);
    }

    #[test]
    fn test_restore_rejects_out_of_range_digit() {
        let result = serde_json::from_str::<OtpCode>(r#"{"digits":[250,1,2,3,4,5],"focus":0}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<OtpCode>(r#"{"digits":[1,2,10,null,null,null],"focus":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_restore_clamps_focus() {
        let code: OtpCode =
            serde_json::from_str(r#"{"digits":[1,2,3,null,null,null],"focus":40}"#).unwrap();
        assert_eq!(code.value(), "123");
        assert_eq!(code.focus(), CODE_LENGTH - 1);

        let mut typed = OtpCode::new();
        typed.paste("9081");
        let restored: OtpCode = serde_json::from_str(&serde_json::to_string(&typed).unwrap()).unwrap();
        assert_eq!(restored, typed);
    }
}
