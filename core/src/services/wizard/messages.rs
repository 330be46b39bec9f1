//! Localized wizard messages
//!
//! Texts live in `i18n/wizard_messages.toml`, embedded at compile time. A key
//! missing for Urdu falls back to English; a key missing entirely renders as
//! the key itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use re_shared::validation::MIN_PASSWORD_LENGTH;
use re_shared::Language;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CODE_LENGTH, MIN_WORK_PHOTOS};

const CATALOG_SOURCE: &str = include_str!("../../../i18n/wizard_messages.toml");

/// Every message the wizard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    NameRequired,
    PhoneRequired,
    PhoneInvalid,
    PasswordRequired,
    PasswordWeak,
    ConfirmPasswordRequired,
    PasswordMismatch,
    CodeIncomplete,
    ServicesRequired,
    AddressRequired,
    VisitingChargeRequired,
    BioRequired,
    WorkPhotosMinimum,
    SelfieRequired,
    CnicRequired,
    CnicInvalid,
    CnicFrontRequired,
    CnicBackRequired,
    SubmissionFailed,
    StepIdentity,
    StepCode,
    StepServices,
    StepLocation,
    StepExperience,
    StepWorkPhotos,
    StepSelfie,
    StepIdentityDocument,
}

impl MessageKey {
    pub const ALL: [MessageKey; 27] = [
        MessageKey::NameRequired,
        MessageKey::PhoneRequired,
        MessageKey::PhoneInvalid,
        MessageKey::PasswordRequired,
        MessageKey::PasswordWeak,
        MessageKey::ConfirmPasswordRequired,
        MessageKey::PasswordMismatch,
        MessageKey::CodeIncomplete,
        MessageKey::ServicesRequired,
        MessageKey::AddressRequired,
        MessageKey::VisitingChargeRequired,
        MessageKey::BioRequired,
        MessageKey::WorkPhotosMinimum,
        MessageKey::SelfieRequired,
        MessageKey::CnicRequired,
        MessageKey::CnicInvalid,
        MessageKey::CnicFrontRequired,
        MessageKey::CnicBackRequired,
        MessageKey::SubmissionFailed,
        MessageKey::StepIdentity,
        MessageKey::StepCode,
        MessageKey::StepServices,
        MessageKey::StepLocation,
        MessageKey::StepExperience,
        MessageKey::StepWorkPhotos,
        MessageKey::StepSelfie,
        MessageKey::StepIdentityDocument,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::NameRequired => "name_required",
            MessageKey::PhoneRequired => "phone_required",
            MessageKey::PhoneInvalid => "phone_invalid",
            MessageKey::PasswordRequired => "password_required",
            MessageKey::PasswordWeak => "password_weak",
            MessageKey::ConfirmPasswordRequired => "confirm_password_required",
            MessageKey::PasswordMismatch => "password_mismatch",
            MessageKey::CodeIncomplete => "code_incomplete",
            MessageKey::ServicesRequired => "services_required",
            MessageKey::AddressRequired => "address_required",
            MessageKey::VisitingChargeRequired => "visiting_charge_required",
            MessageKey::BioRequired => "bio_required",
            MessageKey::WorkPhotosMinimum => "work_photos_minimum",
            MessageKey::SelfieRequired => "selfie_required",
            MessageKey::CnicRequired => "cnic_required",
            MessageKey::CnicInvalid => "cnic_invalid",
            MessageKey::CnicFrontRequired => "cnic_front_required",
            MessageKey::CnicBackRequired => "cnic_back_required",
            MessageKey::SubmissionFailed => "submission_failed",
            MessageKey::StepIdentity => "step_identity",
            MessageKey::StepCode => "step_code",
            MessageKey::StepServices => "step_services",
            MessageKey::StepLocation => "step_location",
            MessageKey::StepExperience => "step_experience",
            MessageKey::StepWorkPhotos => "step_work_photos",
            MessageKey::StepSelfie => "step_selfie",
            MessageKey::StepIdentityDocument => "step_identity_document",
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
struct MessageCatalog {
    #[serde(default)]
    messages: HashMap<String, LocalizedText>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    en: String,
    #[serde(default)]
    ur: Option<String>,
}

impl LocalizedText {
    fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Urdu => self.ur.as_deref().unwrap_or(&self.en),
        }
    }
}

static CATALOG: Lazy<MessageCatalog> = Lazy::new(|| {
    match toml::from_str::<MessageCatalog>(CATALOG_SOURCE) {
        Ok(catalog) => catalog,
        Err(error) => {
            tracing::error!(error = %error, "Failed to parse wizard message catalog");
            MessageCatalog::default()
        }
    }
});

/// Render a message in the given language with placeholders filled in
pub fn message(key: MessageKey, language: Language) -> String {
    match CATALOG.messages.get(key.as_str()) {
        Some(text) => fill_placeholders(text.get(language)),
        None => {
            tracing::warn!(key = key.as_str(), "Missing wizard message");
            key.as_str().to_string()
        }
    }
}

fn fill_placeholders(template: &str) -> String {
    template
        .replace("{min_photos}", &MIN_WORK_PHOTOS.to_string())
        .replace("{code_length}", &CODE_LENGTH.to_string())
        .replace("{min_password}", &MIN_PASSWORD_LENGTH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_languages() {
        for key in MessageKey::ALL {
            let text = CATALOG
                .messages
                .get(key.as_str())
                .unwrap_or_else(|| panic!("missing message {}", key));
            assert!(!text.en.is_empty(), "empty English text for {}", key);
            assert!(text.ur.is_some(), "missing Urdu text for {}", key);
        }
    }

    #[test]
    fn test_placeholders_are_filled() {
        let english = message(MessageKey::WorkPhotosMinimum, Language::English);
        assert_eq!(english, "Add at least 2 photos of your work");

        let urdu = message(MessageKey::CodeIncomplete, Language::Urdu);
        assert!(urdu.contains('6'));
        assert!(!urdu.contains('{'));
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(
            message(MessageKey::NameRequired, Language::English),
            message(MessageKey::NameRequired, Language::Urdu)
        );
    }
}
