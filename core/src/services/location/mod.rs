//! Address resolution for the location step
//!
//! Coordinates only ever enter the field store through this module: a
//! geocoder suggestion, a popular-city shortcut, or the device position.

use async_trait::async_trait;
use re_shared::Coordinate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ResolvedLocation;
use crate::errors::{DeviceError, GeocodingError};

/// Queries shorter than this (after trimming) are not sent to the geocoder
pub const MIN_QUERY_LENGTH: usize = 3;

/// An autocomplete prediction for a typed address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Address autocomplete and (reverse) geocoding
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Predictions for a partially typed address
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError>;

    /// Resolve a chosen prediction to an address with coordinates
    async fn resolve(&self, suggestion: &Suggestion) -> Result<ResolvedLocation, GeocodingError>;

    /// Human-readable address for a coordinate
    async fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodingError>;
}

/// Device geolocation
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, DeviceError>;
}

/// Fetch suggestions, skipping the geocoder for very short queries
pub async fn search(
    geocoder: &dyn Geocoder,
    query: &str,
) -> Result<Vec<Suggestion>, GeocodingError> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LENGTH {
        return Ok(Vec::new());
    }
    geocoder.suggest(query).await
}

/// Resolve the device position to an address
///
/// A failed reverse lookup does not fail the whole operation: the address
/// falls back to the formatted coordinates.
pub async fn locate(
    provider: &dyn LocationProvider,
    geocoder: &dyn Geocoder,
) -> Result<ResolvedLocation, DeviceError> {
    let coordinate = provider.current_position().await?;

    let address = match geocoder.reverse(coordinate).await {
        Ok(address) => address,
        Err(error) => {
            tracing::warn!(
                error = %error,
                event = "reverse_geocode_failed",
                "Reverse geocoding failed, using raw coordinates"
            );
            format_coordinate(&coordinate)
        }
    };

    Ok(ResolvedLocation::new(address, coordinate))
}

/// Coordinates rendered as an address of last resort
pub fn format_coordinate(coordinate: &Coordinate) -> String {
    format!("{:.4}, {:.4}", coordinate.latitude, coordinate.longitude)
}

/// One-tap city shortcuts offered on the location step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopularCity {
    Karachi,
    Lahore,
    Islamabad,
    Rawalpindi,
    Faisalabad,
    Multan,
    Peshawar,
    Quetta,
}

impl PopularCity {
    pub const ALL: [PopularCity; 8] = [
        PopularCity::Karachi,
        PopularCity::Lahore,
        PopularCity::Islamabad,
        PopularCity::Rawalpindi,
        PopularCity::Faisalabad,
        PopularCity::Multan,
        PopularCity::Peshawar,
        PopularCity::Quetta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PopularCity::Karachi => "Karachi",
            PopularCity::Lahore => "Lahore",
            PopularCity::Islamabad => "Islamabad",
            PopularCity::Rawalpindi => "Rawalpindi",
            PopularCity::Faisalabad => "Faisalabad",
            PopularCity::Multan => "Multan",
            PopularCity::Peshawar => "Peshawar",
            PopularCity::Quetta => "Quetta",
        }
    }

    /// City centre
    pub fn coordinate(&self) -> Coordinate {
        let (latitude, longitude) = match self {
            PopularCity::Karachi => (24.8607, 67.0011),
            PopularCity::Lahore => (31.5204, 74.3587),
            PopularCity::Islamabad => (33.6844, 73.0479),
            PopularCity::Rawalpindi => (33.5651, 73.0169),
            PopularCity::Faisalabad => (31.4504, 73.1350),
            PopularCity::Multan => (30.1575, 71.5249),
            PopularCity::Peshawar => (34.0151, 71.5249),
            PopularCity::Quetta => (30.1798, 66.9750),
        };
        Coordinate::new(latitude, longitude)
    }

    /// Address line used when the city is chosen as a shortcut
    pub fn address(&self) -> String {
        format!("{}, Pakistan", self.name())
    }

    pub fn resolved(&self) -> ResolvedLocation {
        ResolvedLocation::new(self.address(), self.coordinate())
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|city| city.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for PopularCity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
