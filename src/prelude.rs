//! Prelude module for common mapnav types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapnav::prelude::*;`

pub use crate::core::{
    builder::MapControllerBuilder,
    config::ControllerConfig,
    geo::{LatLng, LatLngBounds},
    place::{Place, PlaceId},
    preview::{PreviewHandle, PreviewState},
    region::{Region, Span},
    route::{RouteGeometry, RouteState},
};

pub use crate::controller::{
    InteractionMode, MapController, MapSnapshot, Marker, RouteOutcome, SearchState,
    SelectionState, SkipReason,
};

pub use crate::input::{
    events::{CameraFit, ControllerEvent, MapEvent},
    handler::EventManager,
};

pub use crate::providers::{
    memory::{StaticPlaces, StaticPreviews, StraightLineDirections},
    Directions, NoData, PlacesSearch, PreviewService, ProviderError,
};

pub use crate::runtime::{default_spawner, spawn_on, AsyncHandle, AsyncSpawner};

pub use crate::{Error as MapError, Result};

pub use std::{
    pin::Pin,
    sync::{Arc, Mutex},
    time::Duration,
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;
