//! In-memory providers backed by fixed data.
//!
//! Useful for demos, offline development and tests. None of them perform
//! I/O; they resolve immediately.

use super::{Directions, PlacesSearch, PreviewService, ProviderError};
use crate::{
    core::{
        constants::DEFAULT_TRAVEL_SPEED_MPS,
        geo::LatLng,
        place::{Place, PlaceId},
        preview::PreviewHandle,
        region::Region,
        route::RouteGeometry,
    },
    prelude::{Duration, HashMap},
};
use async_trait::async_trait;
use std::cmp::Ordering;

/// Searches a fixed catalogue by case-insensitive substring match on the
/// name or address. Places inside the bias region come first, then by
/// distance from its center.
#[derive(Debug, Clone, Default)]
pub struct StaticPlaces {
    catalogue: Vec<Place>,
}

impl StaticPlaces {
    pub fn new(catalogue: Vec<Place>) -> Self {
        Self { catalogue }
    }

    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }

    fn matches(place: &Place, needle: &str) -> bool {
        place.name.to_lowercase().contains(needle)
            || place
                .address
                .as_deref()
                .map(|address| address.to_lowercase().contains(needle))
                .unwrap_or(false)
    }
}

#[async_trait]
impl PlacesSearch for StaticPlaces {
    async fn search(&self, query: &str, region: &Region) -> Result<Vec<Place>, ProviderError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(bool, f64, &Place)> = self
            .catalogue
            .iter()
            .filter(|place| Self::matches(place, &needle))
            .map(|place| {
                (
                    region.contains(&place.coordinate),
                    region.center.distance_to(&place.coordinate),
                    place,
                )
            })
            .collect();

        hits.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then_with(|| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        });

        Ok(hits.into_iter().map(|(_, _, place)| place.clone()).collect())
    }
}

/// Routes along the straight line between the two coordinates at a fixed
/// travel speed
#[derive(Debug, Clone)]
pub struct StraightLineDirections {
    speed_mps: f64,
}

impl StraightLineDirections {
    pub fn new(speed_mps: f64) -> Self {
        Self { speed_mps }
    }
}

impl Default for StraightLineDirections {
    fn default() -> Self {
        Self::new(DEFAULT_TRAVEL_SPEED_MPS)
    }
}

#[async_trait]
impl Directions for StraightLineDirections {
    async fn route(
        &self,
        from: LatLng,
        to: LatLng,
    ) -> Result<Option<RouteGeometry>, ProviderError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(ProviderError::InvalidResponse(format!(
                "cannot route between {from:?} and {to:?}"
            )));
        }
        if from == to {
            return Ok(None);
        }
        if !self.speed_mps.is_finite() || self.speed_mps <= 0.0 {
            return Err(ProviderError::Unavailable(
                "travel speed must be positive".to_string(),
            ));
        }

        let distance = from.distance_to(&to);
        let travel_time = Duration::try_from_secs_f64(distance / self.speed_mps)
            .map_err(|err| ProviderError::InvalidResponse(format!("travel time: {err}")))?;
        Ok(Some(
            RouteGeometry::new(vec![from, to], distance, travel_time).with_name("Direct"),
        ))
    }
}

/// Serves preview handles from a fixed id → uri table
#[derive(Debug, Clone, Default)]
pub struct StaticPreviews {
    uris: HashMap<PlaceId, String>,
}

impl StaticPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preview(mut self, id: impl Into<PlaceId>, uri: impl Into<String>) -> Self {
        self.uris.insert(id.into(), uri.into());
        self
    }
}

#[async_trait]
impl PreviewService for StaticPreviews {
    async fn preview(&self, place: &Place) -> Result<Option<PreviewHandle>, ProviderError> {
        Ok(self
            .uris
            .get(&place.id)
            .map(|uri| PreviewHandle::new(place.id.clone(), uri.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> StaticPlaces {
        StaticPlaces::new(vec![
            Place::new("far", "Coffee Far Away", LatLng::new(38.5, -121.5)),
            Place::new("near", "Coffee Nearby", LatLng::new(37.776, -122.418)),
            Place::new("mid", "Corner Coffee", LatLng::new(37.79, -122.40)),
            Place::new("tea", "Tea House", LatLng::new(37.775, -122.419))
                .with_address("1 Coffee Alley"),
            Place::new("books", "Bookshop", LatLng::new(37.77, -122.42)),
        ])
    }

    #[tokio::test]
    async fn test_static_places_orders_by_region_then_distance() {
        let region = Region::around(LatLng::new(37.7749, -122.4194), 0.1);
        let results = catalogue().search("COFFEE", &region).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["tea", "near", "mid", "far"]);
    }

    #[tokio::test]
    async fn test_static_places_blank_query() {
        let region = Region::around(LatLng::default(), 1.0);
        assert!(catalogue().search("   ", &region).await.unwrap().is_empty());
        assert!(catalogue().search("zzz", &region).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_straight_line_directions() {
        let directions = StraightLineDirections::new(10.0);
        let from = LatLng::new(37.7793, -122.4193);
        let to = LatLng::new(37.7955, -122.3937);

        let route = directions.route(from, to).await.unwrap().unwrap();
        assert_eq!(route.polyline, vec![from, to]);
        assert!((route.expected_travel_time.as_secs_f64() - route.distance_meters / 10.0).abs() < 1e-6);
        assert_eq!(route.distance_meters, route.polyline_length());

        assert!(directions.route(from, from).await.unwrap().is_none());
        assert!(directions
            .route(LatLng::new(100.0, 0.0), to)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_unusable_speed_is_an_error() {
        let from = LatLng::new(37.7793, -122.4193);
        let to = LatLng::new(37.7955, -122.3937);

        for speed in [f64::NAN, f64::INFINITY, 0.0, -1.0] {
            let result = StraightLineDirections::new(speed).route(from, to).await;
            assert!(matches!(result, Err(ProviderError::Unavailable(_))));
        }

        // Travel time too long for a Duration
        let result = StraightLineDirections::new(f64::MIN_POSITIVE)
            .route(from, to)
            .await;
        assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_static_previews() {
        let previews = StaticPreviews::new().with_preview("p1", "preview://p1");
        let known = Place::new("p1", "One", LatLng::default());
        let unknown = Place::new("p2", "Two", LatLng::default());

        let handle = previews.preview(&known).await.unwrap().unwrap();
        assert_eq!(handle.uri, "preview://p1");
        assert!(previews.preview(&unknown).await.unwrap().is_none());
    }
}
