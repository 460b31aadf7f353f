//! # mapnav
//!
//! An async-aware map interaction controller.
//!
//! `mapnav` coordinates free-text place search, place selection, route
//! calculation and preview retrieval against external mapping providers,
//! and exposes a consistent, serializable snapshot of the interaction state
//! for whatever draws the map. Overlapping provider calls are reconciled with
//! last-request-wins semantics so a slow, stale response can never overwrite
//! the result of a newer request.

pub mod controller;
pub mod core;
pub mod input;
pub mod logging;
pub mod prelude;
pub mod providers;
pub mod runtime;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapControllerBuilder,
    config::ControllerConfig,
    geo::{LatLng, LatLngBounds},
    place::{Place, PlaceId},
    preview::{PreviewHandle, PreviewState},
    region::Region,
    route::{RouteGeometry, RouteState},
};

pub use controller::{
    InteractionMode, MapController, MapSnapshot, Marker, RouteOutcome, SearchState,
    SelectionState, SkipReason,
};

pub use input::{
    events::{CameraFit, ControllerEvent, MapEvent},
    handler::EventManager,
};

pub use providers::{Directions, NoData, PlacesSearch, PreviewService, ProviderError};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Error type alias for convenience
pub type Error = MapError;
