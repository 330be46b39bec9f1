//! Per-step validation rules
//!
//! Each rule inspects the field store and reports every failing field of its
//! step at once. The [`Validator`] renders those failures into an
//! [`ErrorMap`] in the wizard's current language.

use re_shared::validation::validators;
use re_shared::{cnic, phone, validation, Language};

use crate::domain::entities::FieldStore;
use crate::domain::value_objects::FieldName;

use super::error_map::ErrorMap;
use super::messages::{self, MessageKey};
use super::registry::StepRegistry;

/// A failing field and the message describing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: FieldName,
    pub key: MessageKey,
}

impl FieldIssue {
    pub fn new(field: FieldName, key: MessageKey) -> Self {
        Self { field, key }
    }
}

/// Validates one step of a registry against the field store
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    registry: &'a StepRegistry,
    language: Language,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a StepRegistry, language: Language) -> Self {
        Self { registry, language }
    }

    /// Validate the fields owned by the 1-based `step_index`
    ///
    /// An empty map means the step may be left. An index outside the
    /// registry has nothing to validate.
    pub fn validate(&self, step_index: usize, store: &FieldStore) -> ErrorMap {
        let mut errors = ErrorMap::new();

        let Some(step) = self.registry.get(step_index) else {
            tracing::warn!(step_index, "Validation requested for unknown step");
            return errors;
        };

        for issue in step.check(store) {
            debug_assert!(
                step.owns(issue.field),
                "step {} reported field {} it does not own",
                step.id,
                issue.field
            );
            errors.insert(issue.field, issue.key, messages::message(issue.key, self.language));
        }

        errors
    }
}

/// Full name, phone, password and its confirmation
pub fn identity_rule(store: &FieldStore) -> Vec<FieldIssue> {
    let identity = &store.identity;
    let mut issues = Vec::new();

    if !validators::not_empty(&identity.full_name) {
        issues.push(FieldIssue::new(FieldName::FullName, MessageKey::NameRequired));
    }

    if !validators::not_empty(&identity.phone) {
        issues.push(FieldIssue::new(FieldName::Phone, MessageKey::PhoneRequired));
    } else if !phone::is_valid_mobile(&identity.phone) {
        issues.push(FieldIssue::new(FieldName::Phone, MessageKey::PhoneInvalid));
    }

    if identity.password.is_empty() {
        issues.push(FieldIssue::new(FieldName::Password, MessageKey::PasswordRequired));
    } else if validation::validate_password(&identity.password).is_err() {
        issues.push(FieldIssue::new(FieldName::Password, MessageKey::PasswordWeak));
    }

    if identity.confirm_password.is_empty() {
        issues.push(FieldIssue::new(FieldName::ConfirmPassword, MessageKey::ConfirmPasswordRequired));
    } else if identity.confirm_password != identity.password {
        issues.push(FieldIssue::new(FieldName::ConfirmPassword, MessageKey::PasswordMismatch));
    }

    issues
}

/// All six code digits entered
pub fn code_rule(store: &FieldStore) -> Vec<FieldIssue> {
    if store.code.is_complete() {
        Vec::new()
    } else {
        vec![FieldIssue::new(FieldName::Code, MessageKey::CodeIncomplete)]
    }
}

/// At least one service with a sub-service
pub fn services_rule(store: &FieldStore) -> Vec<FieldIssue> {
    if store.services.is_empty() {
        vec![FieldIssue::new(FieldName::Services, MessageKey::ServicesRequired)]
    } else {
        Vec::new()
    }
}

/// Non-empty address
///
/// Coordinates are not checked: an address typed without choosing a
/// suggestion is accepted with zero coordinates.
pub fn location_rule(store: &FieldStore) -> Vec<FieldIssue> {
    if validators::not_empty(&store.location.address) {
        Vec::new()
    } else {
        vec![FieldIssue::new(FieldName::Address, MessageKey::AddressRequired)]
    }
}

/// Positive visiting charge and a non-empty bio
pub fn experience_rule(store: &FieldStore) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if store.experience.visiting_charge == 0 {
        issues.push(FieldIssue::new(FieldName::VisitingCharge, MessageKey::VisitingChargeRequired));
    }
    if !validators::not_empty(&store.experience.bio) {
        issues.push(FieldIssue::new(FieldName::Bio, MessageKey::BioRequired));
    }

    issues
}

pub fn work_photos_rule(store: &FieldStore) -> Vec<FieldIssue> {
    if store.work_photos.meets_minimum() {
        Vec::new()
    } else {
        vec![FieldIssue::new(FieldName::WorkPhotos, MessageKey::WorkPhotosMinimum)]
    }
}

pub fn selfie_rule(store: &FieldStore) -> Vec<FieldIssue> {
    if store.selfie.is_filled() {
        Vec::new()
    } else {
        vec![FieldIssue::new(FieldName::Selfie, MessageKey::SelfieRequired)]
    }
}

/// CNIC in 5-7-1 shape with both card images
pub fn identity_document_rule(store: &FieldStore) -> Vec<FieldIssue> {
    let document = &store.identity_document;
    let mut issues = Vec::new();

    if document.number.is_empty() {
        issues.push(FieldIssue::new(FieldName::Cnic, MessageKey::CnicRequired));
    } else if !cnic::is_valid_cnic(document.number.as_str()) {
        issues.push(FieldIssue::new(FieldName::Cnic, MessageKey::CnicInvalid));
    }

    if document.front.is_none() {
        issues.push(FieldIssue::new(FieldName::CnicFront, MessageKey::CnicFrontRequired));
    }
    if document.back.is_none() {
        issues.push(FieldIssue::new(FieldName::CnicBack, MessageKey::CnicBackRequired));
    }

    issues
}
