//! Services a worker offers, with the sub-services chosen under each.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

/// One offered service and the sub-services selected under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    service_id: String,
    service_name: String,
    sub_service_ids: BTreeSet<String>,
}

impl ServiceEntry {
    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn sub_service_ids(&self) -> &BTreeSet<String> {
        &self.sub_service_ids
    }
}

/// The set of selected services
///
/// A service is present only while at least one of its sub-services is
/// selected; deselecting the last one removes the entry. Entries keep the
/// order in which services were first selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ServiceEntry>", into = "Vec<ServiceEntry>")]
pub struct ServiceSelection {
    entries: Vec<ServiceEntry>,
}

impl ServiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a sub-service, creating the service entry if needed
    pub fn select(&mut self, service_id: &str, service_name: &str, sub_service_id: &str) {
        match self.position(service_id) {
            Some(index) => {
                self.entries[index]
                    .sub_service_ids
                    .insert(sub_service_id.to_string());
            }
            None => self.entries.push(ServiceEntry {
                service_id: service_id.to_string(),
                service_name: service_name.to_string(),
                sub_service_ids: BTreeSet::from([sub_service_id.to_string()]),
            }),
        }
    }

    /// Deselect a sub-service, dropping the service when it becomes empty
    ///
    /// Returns whether anything changed.
    pub fn deselect(&mut self, service_id: &str, sub_service_id: &str) -> bool {
        let Some(index) = self.position(service_id) else {
            return false;
        };
        let removed = self.entries[index].sub_service_ids.remove(sub_service_id);
        if self.entries[index].sub_service_ids.is_empty() {
            self.entries.remove(index);
        }
        removed
    }

    /// Flip a sub-service; returns whether it is selected afterwards
    pub fn toggle(&mut self, service_id: &str, service_name: &str, sub_service_id: &str) -> bool {
        if self.is_selected(service_id, sub_service_id) {
            self.deselect(service_id, sub_service_id);
            false
        } else {
            self.select(service_id, service_name, sub_service_id);
            true
        }
    }

    /// Drop a service and all of its sub-services
    pub fn remove_service(&mut self, service_id: &str) -> bool {
        match self.position(service_id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, service_id: &str, sub_service_id: &str) -> bool {
        self.get(service_id)
            .is_some_and(|entry| entry.sub_service_ids.contains(sub_service_id))
    }

    pub fn get(&self, service_id: &str) -> Option<&ServiceEntry> {
        self.entries.iter().find(|entry| entry.service_id == service_id)
    }

    pub fn entries(&self) -> &[ServiceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, service_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.service_id == service_id)
    }
}

impl TryFrom<Vec<ServiceEntry>> for ServiceSelection {
    type Error = WizardError;

    fn try_from(entries: Vec<ServiceEntry>) -> Result<Self, Self::Error> {
        if let Some(empty) = entries.iter().find(|entry| entry.sub_service_ids.is_empty()) {
            return Err(WizardError::EmptyServiceEntry {
                service_id: empty.service_id.clone(),
            });
        }
        Ok(Self { entries })
    }
}

impl From<ServiceSelection> for Vec<ServiceEntry> {
    fn from(value: ServiceSelection) -> Self {
        value.entries
    }
}
