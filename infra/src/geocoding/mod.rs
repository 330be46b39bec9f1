//! Geocoding and device location adapters
//!
//! Offline implementations backed by the popular-city table. They give the
//! location step something real to resolve against in development and tests.

use async_trait::async_trait;
use re_core::domain::ResolvedLocation;
use re_core::errors::{DeviceError, DeviceKind, GeocodingError};
use re_core::services::location::{
    format_coordinate, Geocoder, LocationProvider, PopularCity, Suggestion,
};
use re_shared::Coordinate;
use tracing::debug;

/// Reverse lookups farther than this from every city centre find nothing
pub const REVERSE_RADIUS_METERS: f64 = 50_000.0;

/// Geocoder that only knows the popular cities
#[derive(Debug, Clone, Default)]
pub struct CityGeocoder;

impl CityGeocoder {
    pub fn new() -> Self {
        Self
    }

    fn suggestion(city: PopularCity) -> Suggestion {
        Suggestion::new(city.name().to_lowercase(), city.address())
    }
}

#[async_trait]
impl Geocoder for CityGeocoder {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError> {
        let needle = query.trim().to_lowercase();

        // Prefix matches first, then the rest
        let (mut prefixed, contained): (Vec<_>, Vec<_>) = PopularCity::ALL
            .iter()
            .copied()
            .filter(|city| city.name().to_lowercase().contains(&needle))
            .partition(|city| city.name().to_lowercase().starts_with(&needle));
        prefixed.extend(contained);

        debug!(query = %needle, results = prefixed.len(), "City suggestions");
        Ok(prefixed.into_iter().map(Self::suggestion).collect())
    }

    async fn resolve(&self, suggestion: &Suggestion) -> Result<ResolvedLocation, GeocodingError> {
        PopularCity::from_name(&suggestion.id)
            .map(|city| city.resolved())
            .ok_or_else(|| GeocodingError::UnknownSuggestion {
                id: suggestion.id.clone(),
            })
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodingError> {
        PopularCity::ALL
            .iter()
            .map(|city| (city, city.coordinate().distance_to(&coordinate)))
            .filter(|(_, distance)| *distance <= REVERSE_RADIUS_METERS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(city, _)| city.address())
            .ok_or_else(|| GeocodingError::NoResults {
                query: format_coordinate(&coordinate),
            })
    }
}

/// Location provider returning a fixed answer
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    position: Result<Coordinate, DeviceError>,
}

impl FixedLocationProvider {
    pub fn fixed(coordinate: Coordinate) -> Self {
        Self {
            position: Ok(coordinate),
        }
    }

    /// A provider whose permission prompt is always refused
    pub fn denied() -> Self {
        Self {
            position: Err(DeviceError::PermissionDenied {
                device: DeviceKind::Geolocation,
            }),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<Coordinate, DeviceError> {
        self.position.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use re_core::services::location::{locate, search};

    #[tokio::test]
    async fn test_suggest_orders_prefix_matches_first() {
        let geocoder = CityGeocoder::new();

        let results = geocoder.suggest("ra").await.unwrap();
        let names: Vec<_> = results.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(names, vec!["Rawalpindi, Pakistan", "Karachi, Pakistan"]);
    }

    #[tokio::test]
    async fn test_search_through_city_geocoder() {
        let geocoder = CityGeocoder::new();

        assert!(search(&geocoder, "mu").await.unwrap().is_empty());
        let results = search(&geocoder, "Mult").await.unwrap();
        assert_eq!(results, vec![Suggestion::new("multan", "Multan, Pakistan")]);
    }

    #[tokio::test]
    async fn test_resolve_suggestion() {
        let geocoder = CityGeocoder::new();
        let suggestion = geocoder.suggest("pesh").await.unwrap().remove(0);

        let resolved = geocoder.resolve(&suggestion).await.unwrap();
        assert_eq!(resolved, PopularCity::Peshawar.resolved());

        let unknown = Suggestion::new("gilgit", "Gilgit, Pakistan");
        assert!(matches!(
            geocoder.resolve(&unknown).await,
            Err(GeocodingError::UnknownSuggestion { .. })
        ));
    }

    #[tokio::test]
    async fn test_reverse_picks_nearest_city() {
        let geocoder = CityGeocoder::new();

        // Saddar, Rawalpindi is a few kilometres from both twin-city centres
        let address = geocoder.reverse(Coordinate::new(33.5973, 73.0479)).await.unwrap();
        assert_eq!(address, "Rawalpindi, Pakistan");

        let far = geocoder.reverse(Coordinate::new(35.9208, 74.3144)).await;
        assert!(matches!(far, Err(GeocodingError::NoResults { .. })));
    }

    #[tokio::test]
    async fn test_locate_with_fixed_provider() {
        let geocoder = CityGeocoder::new();

        let resolved = locate(&FixedLocationProvider::fixed(Coordinate::new(31.52, 74.35)), &geocoder)
            .await
            .unwrap();
        assert_eq!(resolved.address, "Lahore, Pakistan");

        let remote = locate(&FixedLocationProvider::fixed(Coordinate::new(35.9208, 74.3144)), &geocoder)
            .await
            .unwrap();
        assert_eq!(remote.address, "35.9208, 74.3144");

        let denied = locate(&FixedLocationProvider::denied(), &geocoder).await;
        assert!(matches!(denied, Err(DeviceError::PermissionDenied { .. })));
    }
}
