//! Controller configuration
//!
//! Every value the controller would otherwise hard-code (where the camera
//! rests, where routes start, how tightly a route is framed) lives here so
//! it can be injected by the host application or loaded from JSON.

use crate::{
    core::{
        constants::{
            DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_FIT_PADDING, DEFAULT_LOG_LEVEL,
            DEFAULT_REGION_SPAN, DEFAULT_ROUTE_ORIGIN_LAT, DEFAULT_ROUTE_ORIGIN_LNG,
        },
        geo::LatLng,
        region::Region,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Region the camera returns to when a route ends, and the search bias
    /// used before the map has reported a camera position
    pub default_region: Region,
    /// Fixed start point of every route
    pub route_origin: LatLng,
    /// Padding applied when framing a route, as a fraction of its span
    pub fit_padding: f64,
    /// Upper bound on the number of candidates kept from a search
    pub max_candidates: Option<usize>,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_region: Region::around(
                LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
                DEFAULT_REGION_SPAN,
            ),
            route_origin: LatLng::new(DEFAULT_ROUTE_ORIGIN_LAT, DEFAULT_ROUTE_ORIGIN_LNG),
            fit_padding: DEFAULT_FIT_PADDING,
            max_candidates: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Parses a configuration from JSON; omitted fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_default_region(mut self, region: Region) -> Self {
        self.default_region = region;
        self
    }

    pub fn with_route_origin(mut self, origin: LatLng) -> Self {
        self.route_origin = origin;
        self
    }

    pub fn with_fit_padding(mut self, padding: f64) -> Self {
        self.fit_padding = padding;
        self
    }

    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_region.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "default region {:?} is not a valid region",
                self.default_region
            )));
        }
        if !self.route_origin.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "route origin {:?} is out of range",
                self.route_origin
            )));
        }
        if !self.fit_padding.is_finite() || self.fit_padding < 0.0 {
            return Err(MapError::Config(format!(
                "fit padding must be a non-negative number, got {}",
                self.fit_padding
            )));
        }
        if self.max_candidates == Some(0) {
            return Err(MapError::Config(
                "max candidates must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ControllerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_region.center, LatLng::new(37.7749, -122.4194));
        assert!(config.max_candidates.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ControllerConfig::from_json_str(
            r#"{ "route_origin": { "lat": 40.7128, "lng": -74.0060 }, "max_candidates": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.route_origin, LatLng::new(40.7128, -74.0060));
        assert_eq!(config.max_candidates, Some(5));
        assert_eq!(config.fit_padding, DEFAULT_FIT_PADDING);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ControllerConfig::default().with_fit_padding(0.3);
        let json = config.to_json_string().unwrap();
        assert_eq!(ControllerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let bad_origin = ControllerConfig::default().with_route_origin(LatLng::new(120.0, 0.0));
        assert!(matches!(
            bad_origin.validate(),
            Err(MapError::InvalidCoordinates(_))
        ));

        let bad_padding = ControllerConfig::default().with_fit_padding(-0.5);
        assert!(matches!(bad_padding.validate(), Err(MapError::Config(_))));

        let zero_candidates = ControllerConfig::default().with_max_candidates(0);
        assert!(matches!(zero_candidates.validate(), Err(MapError::Config(_))));

        assert!(matches!(
            ControllerConfig::from_json_str("{ not json"),
            Err(MapError::Serialization(_))
        ));
    }
}
