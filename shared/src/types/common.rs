//! Common type definitions

use serde::{Deserialize, Serialize};

/// Coordinate for location-based features
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// The zero coordinate a location starts out with before anything is chosen
    pub fn unset() -> Self {
        Self::default()
    }

    /// Whether this is still the initial zero coordinate
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Calculate distance to another coordinate (in meters)
    /// Using Haversine formula
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_coordinate() {
        assert!(Coordinate::unset().is_unset());
        assert!(!Coordinate::new(24.8607, 67.0011).is_unset());
    }

    #[test]
    fn test_coordinate_distance() {
        let karachi = Coordinate::new(24.8607, 67.0011);
        let lahore = Coordinate::new(31.5204, 74.3587);

        let distance_km = karachi.distance_to(&lahore) / 1000.0;

        // Roughly 1,030 km as the crow flies
        assert!((distance_km - 1030.0).abs() < 30.0);
    }
}
