//! Route geometry returned by a directions provider and the route state
//! machine the controller drives.

use crate::core::{
    geo::{LatLng, LatLngBounds},
    place::Place,
};
use geo::{BoundingRect, HaversineLength};
use geo_types::LineString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A calculated route between two coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    /// Ordered vertices of the route polyline
    pub polyline: Vec<LatLng>,
    pub distance_meters: f64,
    pub expected_travel_time: Duration,
    #[serde(default)]
    pub name: String,
}

impl RouteGeometry {
    pub fn new(polyline: Vec<LatLng>, distance_meters: f64, expected_travel_time: Duration) -> Self {
        Self {
            polyline,
            distance_meters,
            expected_travel_time,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn line_string(&self) -> LineString<f64> {
        self.polyline
            .iter()
            .map(|point| geo_types::Coord::from(*point))
            .collect()
    }

    /// Bounding box of the polyline, `None` when it has no vertices
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.line_string().bounding_rect().map(LatLngBounds::from)
    }

    /// Great-circle length of the polyline in meters
    pub fn polyline_length(&self) -> f64 {
        self.line_string().haversine_length()
    }
}

/// Whether a route is being shown
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteState {
    #[default]
    Idle,
    /// `geometry` is `None` when directions could not be obtained; the
    /// route is still active so the user can end it.
    Active {
        geometry: Option<RouteGeometry>,
        destination: Place,
    },
}

impl RouteState {
    pub fn is_active(&self) -> bool {
        matches!(self, RouteState::Active { .. })
    }

    pub fn destination(&self) -> Option<&Place> {
        match self {
            RouteState::Active { destination, .. } => Some(destination),
            RouteState::Idle => None,
        }
    }

    pub fn geometry(&self) -> Option<&RouteGeometry> {
        match self {
            RouteState::Active { geometry, .. } => geometry.as_ref(),
            RouteState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> RouteGeometry {
        RouteGeometry::new(
            vec![
                LatLng::new(37.7793, -122.4193),
                LatLng::new(37.7850, -122.4100),
                LatLng::new(37.7760, -122.3950),
            ],
            2_100.0,
            Duration::from_secs(420),
        )
    }

    #[test]
    fn test_route_bounds() {
        let bounds = sample_route().bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(37.7760, -122.4193));
        assert_eq!(bounds.north_east, LatLng::new(37.7850, -122.3950));
    }

    #[test]
    fn test_empty_route_has_no_bounds() {
        let route = RouteGeometry::new(Vec::new(), 0.0, Duration::ZERO);
        assert!(route.bounds().is_none());
        assert_eq!(route.polyline_length(), 0.0);
    }

    #[test]
    fn test_polyline_length() {
        let length = sample_route().polyline_length();
        // Two legs of roughly 1.1 km and 1.6 km
        assert!(length > 2_000.0 && length < 3_500.0);
    }

    #[test]
    fn test_route_state_accessors() {
        assert!(!RouteState::Idle.is_active());
        assert!(RouteState::Idle.destination().is_none());

        let destination = Place::new("p1", "Ferry Building", LatLng::new(37.7955, -122.3937));
        let active = RouteState::Active {
            geometry: None,
            destination: destination.clone(),
        };
        assert!(active.is_active());
        assert_eq!(active.destination(), Some(&destination));
        assert!(active.geometry().is_none());
    }
}
