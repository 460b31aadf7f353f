use super::request::RequestTracker;
use crate::{
    core::{place::Place, preview::PreviewState, region::Region, route::RouteState},
    runtime::AsyncHandle,
};
use serde::{Deserialize, Serialize};

/// Mutually exclusive interaction modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Searching and inspecting places
    #[default]
    Browsing,
    /// A route is on screen; search and place details are suppressed
    Routing,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    /// Whether `query` has been submitted, as opposed to merely typed
    pub committed: bool,
    /// Results of the latest committed search, in provider order
    pub candidates: Vec<Place>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected: Option<Place>,
    pub details_visible: bool,
}

/// Everything the controller mutates, guarded by one lock
#[derive(Default)]
pub(crate) struct ControllerState {
    pub mode: InteractionMode,
    pub search: SearchState,
    pub selected: Option<Place>,
    pub route: RouteState,
    pub preview: PreviewState,
    pub view_region: Option<Region>,
    pub requests: RequestTracker,
    pub preview_task: Option<Box<dyn AsyncHandle>>,
}

impl ControllerState {
    /// Details show for a selection only while browsing
    pub fn details_visible(&self) -> bool {
        self.selected.is_some() && self.mode == InteractionMode::Browsing
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState {
            selected: self.selected.clone(),
            details_visible: self.details_visible(),
        }
    }
}
