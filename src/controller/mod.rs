//! The map interaction controller.
//!
//! [`MapController`] is a cheap, cloneable handle. All state sits behind a
//! single lock that is never held across an `.await`, so every transition
//! between provider suspensions is applied atomically. Provider calls for
//! search and routing are tracked by request generation; preview fetches are
//! spawned in the background and checked against the selection they were
//! made for.

mod preview;
pub mod request;
mod route;
mod search;
mod selection;
mod snapshot;
mod state;

pub use route::{RouteOutcome, SkipReason};
pub use snapshot::{MapSnapshot, Marker};
pub use state::{InteractionMode, SearchState, SelectionState};

use crate::{
    core::{config::ControllerConfig, region::Region},
    input::{
        events::{ControllerEvent, MapEvent},
        handler::{dispatch, EventManager},
    },
    prelude::{Arc, Mutex},
    providers::{Directions, PlacesSearch, PreviewService},
    runtime::AsyncSpawner,
};
use crossbeam_channel::Receiver;
use state::ControllerState;
use std::sync::{MutexGuard, PoisonError};

pub(crate) struct Shared {
    config: ControllerConfig,
    places: Arc<dyn PlacesSearch>,
    directions: Arc<dyn Directions>,
    previews: Arc<dyn PreviewService>,
    spawner: Arc<dyn AsyncSpawner>,
    state: Mutex<ControllerState>,
    /// Locked after `state` when both are needed
    events: Mutex<EventManager>,
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_events(&self) -> MutexGuard<'_, EventManager> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: ControllerEvent) {
        self.lock_events().emit(event);
    }

    fn emit_selection(&self, state: &ControllerState) {
        self.emit(ControllerEvent::SelectionChanged {
            selected: state.selected.as_ref().map(|place| place.id.clone()),
            details_visible: state.details_visible(),
        });
    }

    fn set_mode(&self, state: &mut ControllerState, mode: InteractionMode) {
        if state.mode == mode {
            return;
        }
        log::debug!("mode {:?} -> {:?}", state.mode, mode);
        state.mode = mode;
        self.emit(ControllerEvent::ModeChanged { mode });
        if state.selected.is_some() {
            // Details visibility depends on the mode
            self.emit_selection(state);
        }
    }
}

/// Coordinates search, selection, routing and previews for one map.
#[derive(Clone)]
pub struct MapController {
    inner: Arc<Shared>,
}

impl MapController {
    pub(crate) fn new(
        config: ControllerConfig,
        places: Arc<dyn PlacesSearch>,
        directions: Arc<dyn Directions>,
        previews: Arc<dyn PreviewService>,
        spawner: Arc<dyn AsyncSpawner>,
    ) -> Self {
        Self {
            inner: Arc::new(Shared {
                config,
                places,
                directions,
                previews,
                spawner,
                state: Mutex::new(ControllerState::default()),
                events: Mutex::new(EventManager::new()),
            }),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.inner.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.inner.lock_state().mode
    }

    /// Record the region the camera currently shows
    pub fn update_view_region(&self, region: Region) {
        let mut state = self.inner.lock_state();
        if state.view_region == Some(region) {
            return;
        }
        state.view_region = Some(region);
        self.inner.emit(ControllerEvent::ViewChanged { region });
    }

    /// Last region reported by the renderer
    pub fn view_region(&self) -> Option<Region> {
        self.inner.lock_state().view_region
    }

    /// Apply an event reported by the map renderer
    pub fn handle_map_event(&self, event: MapEvent) {
        match event {
            MapEvent::CameraChanged { region } => self.update_view_region(region),
            MapEvent::MarkerSelected { place_id } => {
                self.select_by_id(&place_id);
            }
            MapEvent::SelectionCleared => self.select(None),
        }
    }

    /// Channel receiving every event emitted from now on
    pub fn subscribe(&self) -> Receiver<ControllerEvent> {
        self.inner.lock_events().subscribe()
    }

    /// Channel receiving only camera-fit requests
    pub fn camera_fits(&self) -> Receiver<ControllerEvent> {
        self.inner
            .lock_events()
            .subscribe_filtered(|event| matches!(event, ControllerEvent::CameraFit { .. }))
    }

    /// Register a callback run by [`process_events`](Self::process_events)
    /// for events of `kind` (`"search"`, `"selection"`, `"route"`,
    /// `"preview"`, `"mode"`, `"view"`, `"camerafit"` or `"*"`)
    pub fn on<F>(&self, kind: &str, callback: F)
    where
        F: Fn(&ControllerEvent) + Send + Sync + 'static,
    {
        self.inner.lock_events().on(kind, callback);
    }

    /// Events waiting for [`process_events`](Self::process_events). Only
    /// events of a kind some callback listens to are queued.
    pub fn pending_events(&self) -> usize {
        self.inner.lock_events().pending_events()
    }

    /// Deliver queued events to registered callbacks. Callbacks run without
    /// any controller lock held and may call back into the controller.
    pub fn process_events(&self) -> Vec<ControllerEvent> {
        let batch = self.inner.lock_events().take_dispatch();
        dispatch(batch)
    }

    /// Cancel background work and make every in-flight request stale.
    /// A preview that was still loading is reported unavailable.
    pub fn shutdown(&self) {
        let mut state = self.inner.lock_state();
        self.inner.abandon_preview(&mut state);
        state.requests.invalidate_all();
        log::debug!("controller shut down");
    }
}
