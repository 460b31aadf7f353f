//! Visible map regions expressed as a center plus a coordinate span.

use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Degrees of latitude and longitude covered by a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// A rectangular map area, used both for camera framing and for biasing
/// place searches toward what the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: LatLng,
    pub span: Span,
}

impl Region {
    pub fn new(center: LatLng, span: Span) -> Self {
        Self { center, span }
    }

    /// Region centered on `center` covering `delta` degrees in both directions
    pub fn around(center: LatLng, delta: f64) -> Self {
        Self::new(center, Span::new(delta, delta))
    }

    /// Builds the region covering `bounds`, grown on every side by
    /// `padding` (a fraction of the span, so 0.1 adds 10% per side).
    pub fn from_bounds(bounds: &LatLngBounds, padding: f64) -> Self {
        let span = bounds.span();
        let grow = 1.0 + 2.0 * padding.max(0.0);
        Self::new(
            bounds.center(),
            Span::new(span.lat * grow, span.lng * grow),
        )
    }

    pub fn bounds(&self) -> LatLngBounds {
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lng = self.span.longitude_delta / 2.0;
        LatLngBounds::from_coords(
            LatLng::clamp_lat(self.center.lat - half_lat),
            self.center.lng - half_lng,
            LatLng::clamp_lat(self.center.lat + half_lat),
            self.center.lng + half_lng,
        )
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        self.bounds().contains(point)
    }

    /// Whether the center is a valid coordinate and both spans are positive
    pub fn is_valid(&self) -> bool {
        self.center.is_valid()
            && self.span.latitude_delta.is_finite()
            && self.span.longitude_delta.is_finite()
            && self.span.latitude_delta > 0.0
            && self.span.longitude_delta > 0.0
    }
}
