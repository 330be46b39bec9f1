//! Resolved location value object.

use re_shared::Coordinate;
use serde::{Deserialize, Serialize};

/// An address together with the coordinates it resolved to
///
/// Only produced by a geocoder suggestion, a city shortcut or device
/// geolocation; the wizard never accepts typed coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub address: String,
    pub coordinate: Coordinate,
}

impl ResolvedLocation {
    pub fn new(address: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            address: address.into(),
            coordinate,
        }
    }
}
