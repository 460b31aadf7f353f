use crate::{
    controller::InteractionMode,
    core::{geo::LatLngBounds, place::PlaceId, preview::PreviewState, region::Region},
};
use serde::{Deserialize, Serialize};

/// Events reported by the map renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    /// The camera settled on a new region
    CameraChanged { region: Region },
    /// The user tapped the marker of a place
    MarkerSelected { place_id: PlaceId },
    /// The user tapped empty map or dismissed the selected annotation
    SelectionCleared,
}

/// Where the renderer should move the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraFit {
    /// Frame a route; `padding` is a fraction of the span per side
    RouteBounds { bounds: LatLngBounds, padding: f64 },
    DefaultRegion { region: Region },
}

impl CameraFit {
    /// The region the camera should end up showing
    pub fn target_region(&self) -> Region {
        match self {
            CameraFit::RouteBounds { bounds, padding } => Region::from_bounds(bounds, *padding),
            CameraFit::DefaultRegion { region } => *region,
        }
    }
}

/// Notifications emitted by the controller on every state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControllerEvent {
    SearchChanged {
        query: String,
        committed: bool,
        candidate_count: usize,
    },
    SelectionChanged {
        selected: Option<PlaceId>,
        details_visible: bool,
    },
    RouteChanged {
        active: bool,
        has_geometry: bool,
    },
    PreviewChanged {
        preview: PreviewState,
    },
    ModeChanged {
        mode: InteractionMode,
    },
    ViewChanged {
        region: Region,
    },
    CameraFit {
        fit: CameraFit,
    },
}

impl ControllerEvent {
    /// Listener key used by [`EventManager::on`](crate::input::handler::EventManager::on)
    pub fn kind(&self) -> &'static str {
        match self {
            ControllerEvent::SearchChanged { .. } => "search",
            ControllerEvent::SelectionChanged { .. } => "selection",
            ControllerEvent::RouteChanged { .. } => "route",
            ControllerEvent::PreviewChanged { .. } => "preview",
            ControllerEvent::ModeChanged { .. } => "mode",
            ControllerEvent::ViewChanged { .. } => "view",
            ControllerEvent::CameraFit { .. } => "camerafit",
        }
    }
}
