//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Languages the wizard renders its labels and messages in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
}

impl Language {
    /// ISO 639-1 code, also the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }

    /// Label shown on the language switch, in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "اردو",
        }
    }

    /// Whether text in this language is laid out right to left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Urdu)
    }

    /// The other supported language, for a two-way toggle
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Urdu,
            Language::Urdu => Language::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ur" | "urd" | "urdu" | "اردو" => Ok(Language::Urdu),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
