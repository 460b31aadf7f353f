//! Controller builder for fluent API configuration
//!
//! This module provides a MapControllerBuilder that wires configuration,
//! providers and the async spawner into a [`MapController`].

use crate::{
    controller::MapController,
    core::{config::ControllerConfig, geo::LatLng, region::Region},
    prelude::Arc,
    providers::{Directions, PlacesSearch, PreviewService},
    runtime::{default_spawner, AsyncSpawner},
    MapError, Result,
};

/// Builder for creating and configuring MapController instances
#[derive(Default)]
pub struct MapControllerBuilder {
    config: ControllerConfig,
    places: Option<Arc<dyn PlacesSearch>>,
    directions: Option<Arc<dyn Directions>>,
    previews: Option<Arc<dyn PreviewService>>,
    spawner: Option<Arc<dyn AsyncSpawner>>,
}

impl MapControllerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the region the camera returns to after a route
    pub fn with_default_region(mut self, region: Region) -> Self {
        self.config.default_region = region;
        self
    }

    /// Set the start point of every route
    pub fn with_route_origin(mut self, origin: LatLng) -> Self {
        self.config.route_origin = origin;
        self
    }

    pub fn with_fit_padding(mut self, padding: f64) -> Self {
        self.config.fit_padding = padding;
        self
    }

    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.config.max_candidates = Some(max);
        self
    }

    pub fn with_places<P: PlacesSearch + 'static>(self, places: P) -> Self {
        self.with_places_arc(Arc::new(places))
    }

    /// Use a places provider the caller keeps a handle to
    pub fn with_places_arc(mut self, places: Arc<dyn PlacesSearch>) -> Self {
        self.places = Some(places);
        self
    }

    pub fn with_directions<D: Directions + 'static>(self, directions: D) -> Self {
        self.with_directions_arc(Arc::new(directions))
    }

    pub fn with_directions_arc(mut self, directions: Arc<dyn Directions>) -> Self {
        self.directions = Some(directions);
        self
    }

    pub fn with_previews<P: PreviewService + 'static>(self, previews: P) -> Self {
        self.with_previews_arc(Arc::new(previews))
    }

    pub fn with_previews_arc(mut self, previews: Arc<dyn PreviewService>) -> Self {
        self.previews = Some(previews);
        self
    }

    /// Spawn background work on a custom executor
    pub fn with_spawner(mut self, spawner: Arc<dyn AsyncSpawner>) -> Self {
        self.spawner = Some(spawner);
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Build the controller. Fails if the configuration is invalid, a provider
    /// is missing, or no spawner was given and there is no runtime to bind to.
    ///
    /// With the `tokio-runtime` feature the default spawner captures the
    /// runtime current at build time, so the controller may later be driven
    /// from threads outside it.
    pub fn build(self) -> Result<MapController> {
        self.config.validate()?;

        let places = self
            .places
            .ok_or_else(|| MapError::Config("no places search provider".to_string()))?;
        let directions = self
            .directions
            .ok_or_else(|| MapError::Config("no directions provider".to_string()))?;
        let previews = self
            .previews
            .ok_or_else(|| MapError::Config("no preview provider".to_string()))?;
        let spawner = match self.spawner {
            Some(spawner) => spawner,
            None => default_spawner().ok_or_else(|| {
                MapError::Runtime(
                    "no async spawner available; build inside a tokio runtime or call with_spawner"
                        .to_string(),
                )
            })?,
        };

        log::debug!(
            "building controller (origin {:?}, default region {:?})",
            self.config.route_origin,
            self.config.default_region.center
        );
        Ok(MapController::new(
            self.config,
            places,
            directions,
            previews,
            spawner,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::memory::{StaticPlaces, StaticPreviews, StraightLineDirections};

    fn complete_builder() -> MapControllerBuilder {
        MapControllerBuilder::new()
            .with_places(StaticPlaces::default())
            .with_directions(StraightLineDirections::default())
            .with_previews(StaticPreviews::new())
    }

    #[tokio::test]
    async fn test_builder_applies_settings() {
        let origin = LatLng::new(51.5074, -0.1278);
        let controller = complete_builder()
            .with_route_origin(origin)
            .with_max_candidates(3)
            .with_fit_padding(0.2)
            .build()
            .unwrap();

        assert_eq!(controller.config().route_origin, origin);
        assert_eq!(controller.config().max_candidates, Some(3));
        assert_eq!(controller.config().fit_padding, 0.2);
    }

    #[test]
    fn test_builder_without_runtime_fails() {
        let result = complete_builder().build();
        assert!(matches!(result, Err(MapError::Runtime(_))));
    }

    #[test]
    fn test_builder_requires_providers() {
        let result = MapControllerBuilder::new()
            .with_places(StaticPlaces::default())
            .build();
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = complete_builder()
            .with_default_region(Region::around(LatLng::default(), -1.0))
            .build();
        assert!(matches!(result, Err(MapError::InvalidCoordinates(_))));
    }
}
