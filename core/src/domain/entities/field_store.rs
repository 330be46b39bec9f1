//! The record holding every value collected by the signup wizard.

use re_shared::Coordinate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    CnicNumber, ExperienceYears, ImageBlob, OtpCode, ResolvedLocation, SelfieSlot,
    ServiceSelection, WorkPhotos,
};

/// Values owned by the identity step
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityFields {
    pub full_name: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for IdentityFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityFields")
            .field("full_name", &self.full_name)
            .field("phone", &re_shared::phone::mask_phone_number(&self.phone))
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

/// Values owned by the location step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFields {
    pub address: String,
    /// Zero until a suggestion, city or geolocation result is chosen
    pub coordinate: Coordinate,
}

impl LocationFields {
    /// Replace address and coordinates from a resolved lookup
    pub fn apply(&mut self, resolved: ResolvedLocation) {
        self.address = resolved.address;
        self.coordinate = resolved.coordinate;
    }

    /// Whether coordinates came from a lookup rather than still being zero
    pub fn is_confirmed(&self) -> bool {
        !self.coordinate.is_unset()
    }
}

/// Values owned by the experience step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceFields {
    pub years: ExperienceYears,
    /// Visiting charge in rupees
    pub visiting_charge: u32,
    pub bio: String,
}

/// Values owned by the identity-document step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocumentFields {
    pub number: CnicNumber,
    pub front: Option<ImageBlob>,
    pub back: Option<ImageBlob>,
}

impl IdentityDocumentFields {
    pub fn has_both_images(&self) -> bool {
        self.front.is_some() && self.back.is_some()
    }
}

/// Everything the wizard has collected so far
///
/// Created empty when the wizard starts and enriched step by step. Moving
/// between steps never clears anything; only explicit edits change values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStore {
    pub identity: IdentityFields,
    pub code: OtpCode,
    pub services: ServiceSelection,
    pub location: LocationFields,
    pub experience: ExperienceFields,
    pub work_photos: WorkPhotos,
    pub selfie: SelfieSlot,
    pub identity_document: IdentityDocumentFields,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }
}
