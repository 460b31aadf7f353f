//! Engine-wide defaults. Keeping them in a single place makes the
//! out-of-the-box behavior easy to tweak.

/// Latitude of the default camera center (San Francisco).
pub const DEFAULT_CENTER_LAT: f64 = 37.7749;

/// Longitude of the default camera center (San Francisco).
pub const DEFAULT_CENTER_LNG: f64 = -122.4194;

/// Degrees of latitude/longitude shown by the default region.
pub const DEFAULT_REGION_SPAN: f64 = 0.1;

/// Latitude of the fixed origin every route starts from.
pub const DEFAULT_ROUTE_ORIGIN_LAT: f64 = 37.7793;

/// Longitude of the fixed origin every route starts from.
pub const DEFAULT_ROUTE_ORIGIN_LNG: f64 = -122.4193;

/// Fraction of the route span added on each side when framing a route.
pub const DEFAULT_FIT_PADDING: f64 = 0.15;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Travel speed assumed by the straight-line directions provider (m/s).
pub const DEFAULT_TRAVEL_SPEED_MPS: f64 = 1.4;
