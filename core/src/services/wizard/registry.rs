//! Ordered table of wizard steps.

use serde::{Deserialize, Serialize};

use crate::domain::entities::FieldStore;
use crate::domain::value_objects::FieldName;
use crate::errors::WizardError;

use super::messages::MessageKey;
use super::validator::{self, FieldIssue};

/// Identity of each step in the worker signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Identity,
    Code,
    Services,
    Location,
    Experience,
    WorkPhotos,
    Selfie,
    IdentityDocument,
}

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Identity => "identity",
            StepId::Code => "code",
            StepId::Services => "services",
            StepId::Location => "location",
            StepId::Experience => "experience",
            StepId::WorkPhotos => "work_photos",
            StepId::Selfie => "selfie",
            StepId::IdentityDocument => "identity_document",
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation function for one step
pub type StepRule = fn(&FieldStore) -> Vec<FieldIssue>;

/// A step: which fields it owns, how it is labelled and how it is validated
#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub id: StepId,
    pub label_key: MessageKey,
    pub fields: &'static [FieldName],
    rule: StepRule,
}

impl StepDefinition {
    pub const fn new(
        id: StepId,
        label_key: MessageKey,
        fields: &'static [FieldName],
        rule: StepRule,
    ) -> Self {
        Self { id, label_key, fields, rule }
    }

    /// Run the step's rule against the store
    pub fn check(&self, store: &FieldStore) -> Vec<FieldIssue> {
        (self.rule)(store)
    }

    pub fn owns(&self, field: FieldName) -> bool {
        self.fields.contains(&field)
    }
}

const WORKER_SIGNUP_STEPS: [StepDefinition; 8] = [
    StepDefinition::new(
        StepId::Identity,
        MessageKey::StepIdentity,
        &[FieldName::FullName, FieldName::Phone, FieldName::Password, FieldName::ConfirmPassword],
        validator::identity_rule,
    ),
    StepDefinition::new(StepId::Code, MessageKey::StepCode, &[FieldName::Code], validator::code_rule),
    StepDefinition::new(
        StepId::Services,
        MessageKey::StepServices,
        &[FieldName::Services],
        validator::services_rule,
    ),
    StepDefinition::new(
        StepId::Location,
        MessageKey::StepLocation,
        &[FieldName::Address],
        validator::location_rule,
    ),
    StepDefinition::new(
        StepId::Experience,
        MessageKey::StepExperience,
        &[FieldName::ExperienceYears, FieldName::VisitingCharge, FieldName::Bio],
        validator::experience_rule,
    ),
    StepDefinition::new(
        StepId::WorkPhotos,
        MessageKey::StepWorkPhotos,
        &[FieldName::WorkPhotos],
        validator::work_photos_rule,
    ),
    StepDefinition::new(StepId::Selfie, MessageKey::StepSelfie, &[FieldName::Selfie], validator::selfie_rule),
    StepDefinition::new(
        StepId::IdentityDocument,
        MessageKey::StepIdentityDocument,
        &[FieldName::Cnic, FieldName::CnicFront, FieldName::CnicBack],
        validator::identity_document_rule,
    ),
];

/// The ordered steps of a wizard, addressed by 1-based index
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptyRegistry);
        }
        Ok(Self { steps })
    }

    /// The eight-step worker signup
    pub fn worker_signup() -> Self {
        Self {
            steps: WORKER_SIGNUP_STEPS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: construction rejects an empty table
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// 1-based index of a step
    pub fn index_of(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id).map(|i| i + 1)
    }

    /// Step owning a field
    pub fn owner_of(&self, field: FieldName) -> Option<&StepDefinition> {
        self.steps.iter().find(|step| step.owns(field))
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn first(&self) -> &StepDefinition {
        &self.steps[0]
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::worker_signup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_worker_signup_order() {
        let registry = StepRegistry::worker_signup();
        let ids: Vec<StepId> = registry.steps().iter().map(|s| s.id).collect();

        assert_eq!(
            ids,
            vec![
                StepId::Identity,
                StepId::Code,
                StepId::Services,
                StepId::Location,
                StepId::Experience,
                StepId::WorkPhotos,
                StepId::Selfie,
                StepId::IdentityDocument,
            ]
        );
        assert_eq!(registry.index_of(StepId::Selfie), Some(7));
        assert_eq!(registry.get(1).map(|s| s.id), Some(StepId::Identity));
        assert!(registry.get(0).is_none());
        assert!(registry.get(9).is_none());
    }

    #[test]
    fn test_each_field_has_exactly_one_owner() {
        let registry = StepRegistry::worker_signup();
        let mut seen = HashSet::new();

        for step in registry.steps() {
            for field in step.fields {
                assert!(seen.insert(*field), "{} owned by more than one step", field);
            }
        }
        assert_eq!(seen.len(), 15);
        assert_eq!(registry.owner_of(FieldName::Bio).map(|s| s.id), Some(StepId::Experience));
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(StepRegistry::new(Vec::new()).unwrap_err(), WizardError::EmptyRegistry);
    }

    #[test]
    fn test_custom_registry() {
        let registry = StepRegistry::new(vec![StepDefinition::new(
            StepId::Services,
            MessageKey::StepServices,
            &[FieldName::Services],
            validator::services_rule,
        )])
        .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.first().id, StepId::Services);
    }
}
