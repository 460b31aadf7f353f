use super::{
    state::{ControllerState, InteractionMode, SearchState, SelectionState},
    MapController,
};
use crate::{
    core::{
        geo::LatLng,
        place::{Place, PlaceId},
        preview::PreviewState,
        region::Region,
        route::RouteState,
    },
    Result,
};
use serde::{Deserialize, Serialize};

/// An annotation the renderer should draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub place_id: PlaceId,
    pub title: String,
    pub coordinate: LatLng,
    pub selected: bool,
}

impl Marker {
    fn for_place(place: &Place, selected: bool) -> Self {
        Self {
            place_id: place.id.clone(),
            title: place.name.clone(),
            coordinate: place.coordinate,
            selected,
        }
    }
}

/// Consistent view of the whole interaction state at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub mode: InteractionMode,
    pub search: SearchState,
    pub selection: SelectionState,
    pub route: RouteState,
    pub preview: PreviewState,
    pub view_region: Option<Region>,
    pub markers: Vec<Marker>,
    /// Whether the search affordance should be offered
    pub search_visible: bool,
    pub details_visible: bool,
}

impl MapSnapshot {
    pub(crate) fn capture(state: &ControllerState) -> Self {
        Self {
            mode: state.mode,
            search: state.search.clone(),
            selection: state.selection(),
            route: state.route.clone(),
            preview: state.preview.clone(),
            view_region: state.view_region,
            markers: derive_markers(state),
            search_visible: state.mode == InteractionMode::Browsing,
            details_visible: state.details_visible(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Candidates while browsing (plus the selection when it is not one of
/// them); only the destination while routing.
fn derive_markers(state: &ControllerState) -> Vec<Marker> {
    let is_selected =
        |place: &Place| state.selected.as_ref().is_some_and(|selected| selected.same_as(place));

    match (&state.mode, &state.route) {
        (InteractionMode::Routing, RouteState::Active { destination, .. }) => {
            vec![Marker::for_place(destination, is_selected(destination))]
        }
        (InteractionMode::Routing, RouteState::Idle) => Vec::new(),
        (InteractionMode::Browsing, _) => {
            let mut markers: Vec<Marker> = state
                .search
                .candidates
                .iter()
                .map(|place| Marker::for_place(place, is_selected(place)))
                .collect();
            if let Some(selected) = &state.selected {
                if !state.search.candidates.contains(selected) {
                    markers.push(Marker::for_place(selected, true));
                }
            }
            markers
        }
    }
}

impl MapController {
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot::capture(&self.inner.lock_state())
    }
}
