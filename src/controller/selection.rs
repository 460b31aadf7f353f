use super::{
    state::{ControllerState, SelectionState},
    MapController, Shared,
};
use crate::{
    core::place::{same_selection, Place, PlaceId},
    prelude::Arc,
};

impl Shared {
    /// Change the selection; returns whether its identity changed.
    ///
    /// Any identity change, including to none, restarts the preview fetch.
    pub(super) fn set_selection(
        self: &Arc<Self>,
        state: &mut ControllerState,
        place: Option<Place>,
    ) -> bool {
        if same_selection(state.selected.as_ref(), place.as_ref()) {
            return false;
        }

        match &place {
            Some(place) => log::debug!("selected {} ({})", place.name, place.id),
            None => log::debug!("selection cleared"),
        }
        state.selected = place;
        self.emit_selection(state);
        self.refresh_preview(state);
        true
    }
}

impl MapController {
    /// Select a place, or clear the selection with `None`
    pub fn select(&self, place: Option<Place>) {
        let mut state = self.inner.lock_state();
        self.inner.set_selection(&mut state, place);
    }

    /// Select a place among the current candidates or the route destination.
    /// Unknown ids leave the selection untouched.
    pub fn select_by_id(&self, id: &PlaceId) -> bool {
        let mut state = self.inner.lock_state();
        let found = state
            .search
            .candidates
            .iter()
            .chain(state.route.destination())
            .find(|place| &place.id == id)
            .cloned();

        match found {
            Some(place) => {
                self.inner.set_selection(&mut state, Some(place));
                true
            }
            None => {
                log::debug!("no place with id {id} to select");
                false
            }
        }
    }

    pub fn clear_selection(&self) {
        self.select(None);
    }

    pub fn selection(&self) -> SelectionState {
        self.inner.lock_state().selection()
    }

    pub fn selected(&self) -> Option<Place> {
        self.inner.lock_state().selected.clone()
    }
}
