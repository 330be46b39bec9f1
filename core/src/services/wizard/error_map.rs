//! Field-level validation errors for the current step.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::value_objects::FieldName;

use super::messages::MessageKey;

/// A single field's validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: MessageKey,
    pub message: String,
}

/// Map from field to its validation failure
///
/// Replaced wholesale each time a step is validated; individual entries are
/// cleared when their field is edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; the first failure recorded for a field wins
    pub fn insert(&mut self, field: FieldName, key: MessageKey, message: String) -> bool {
        if self.errors.contains_key(&field) {
            return false;
        }
        self.errors.insert(field, FieldError { key, message });
        true
    }

    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message to show next to a field, if any
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

// Serialized as `{ "fieldName": "message" }` for the presentation layer
impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), &error.message)?;
        }
        map.end()
    }
}
