//! Registration payload assembled from a completed field store.

use re_shared::{phone, Coordinate, Language};
use serde::{Deserialize, Serialize};

use super::field_store::FieldStore;
use crate::domain::value_objects::{ImageBlob, ServiceEntry};

/// What the submission sink receives
///
/// The password confirmation is dropped, the phone number is normalized to
/// E.164 and the code digits are concatenated.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRegistration {
    pub full_name: String,
    pub phone: String,
    pub password: String,
    pub verification_code: String,
    pub services: Vec<ServiceEntry>,
    pub address: String,
    pub coordinate: Coordinate,
    pub experience_years: u8,
    pub visiting_charge: u32,
    pub bio: String,
    pub work_photos: Vec<ImageBlob>,
    pub selfie: Option<ImageBlob>,
    pub cnic: String,
    pub cnic_front: Option<ImageBlob>,
    pub cnic_back: Option<ImageBlob>,
    pub language: Language,
}

impl std::fmt::Debug for WorkerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerRegistration")
            .field("full_name", &self.full_name)
            .field("phone", &phone::mask_phone_number(&self.phone))
            .field("services", &self.services.len())
            .field("address", &self.address)
            .field("experience_years", &self.experience_years)
            .field("visiting_charge", &self.visiting_charge)
            .field("work_photos", &self.work_photos.len())
            .field("has_selfie", &self.selfie.is_some())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl WorkerRegistration {
    pub fn from_store(store: &FieldStore, language: Language) -> Self {
        let phone = phone::to_e164(&store.identity.phone)
            .unwrap_or_else(|| phone::normalize_phone_number(&store.identity.phone));

        Self {
            full_name: store.identity.full_name.trim().to_string(),
            phone,
            password: store.identity.password.clone(),
            verification_code: store.code.value(),
            services: store.services.entries().to_vec(),
            address: store.location.address.trim().to_string(),
            coordinate: store.location.coordinate,
            experience_years: store.experience.years.years(),
            visiting_charge: store.experience.visiting_charge,
            bio: store.experience.bio.trim().to_string(),
            work_photos: store.work_photos.as_slice().to_vec(),
            selfie: store.selfie.image().cloned(),
            cnic: store.identity_document.number.as_str().to_string(),
            cnic_front: store.identity_document.front.clone(),
            cnic_back: store.identity_document.back.clone(),
            language,
        }
    }
}
