//! Unit tests for registration payload assembly

use re_shared::Language;

use crate::domain::entities::{FieldStore, WorkerRegistration};
use crate::domain::value_objects::{CnicNumber, ExperienceYears, ImageBlob};

#[test]
fn test_from_store_normalizes_values() {
    let mut store = FieldStore::new();
    store.identity.full_name = "  Bilal Ahmed ".to_string();
    store.identity.phone = "0300-1234567".to_string();
    store.identity.password = "Secret1!".to_string();
    store.identity.confirm_password = "Secret1!".to_string();
    store.code.paste("123456");
    store.services.select("plumbing", "Plumbing", "leak-repair");
    store.experience.years = ExperienceYears::Five;
    store.experience.visiting_charge = 500;
    store.identity_document.number = CnicNumber::from_input("1234512345671");
    store.selfie.set(ImageBlob::from_camera(vec![7]));

    let registration = WorkerRegistration::from_store(&store, Language::Urdu);

    assert_eq!(registration.full_name, "Bilal Ahmed");
    assert_eq!(registration.phone, "+923001234567");
    assert_eq!(registration.verification_code, "123456");
    assert_eq!(registration.services.len(), 1);
    assert_eq!(registration.experience_years, 5);
    assert_eq!(registration.cnic, "12345-1234567-1");
    assert!(registration.selfie.is_some());
    assert_eq!(registration.language, Language::Urdu);
}

#[test]
fn test_registration_omits_confirmation() {
    let mut store = FieldStore::new();
    store.identity.confirm_password = "only-in-store".to_string();

    let registration = WorkerRegistration::from_store(&store, Language::English);
    let json = serde_json::to_string(&registration).unwrap();

    assert!(!json.contains("only-in-store"));
    assert!(json.contains("\"verificationCode\""));
}
