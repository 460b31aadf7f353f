use super::{state::ControllerState, MapController, Shared};
use crate::{
    core::{place::PlaceId, preview::{PreviewHandle, PreviewState}},
    input::events::ControllerEvent,
    prelude::Arc,
    providers::{settle_optional, NoData},
    runtime::spawn_on,
};

impl Shared {
    fn set_preview(&self, state: &mut ControllerState, preview: PreviewState) {
        if state.preview == preview {
            return;
        }
        state.preview = preview.clone();
        self.emit(ControllerEvent::PreviewChanged { preview });
    }

    /// Invalidate the preview after the selection identity changed and, if
    /// something is selected, start fetching its preview.
    pub(super) fn refresh_preview(self: &Arc<Self>, state: &mut ControllerState) {
        if let Some(task) = state.preview_task.take() {
            if !task.is_finished() {
                log::debug!("cancelling superseded preview fetch");
                task.cancel();
            }
        }

        let Some(place) = state.selected.clone() else {
            self.set_preview(state, PreviewState::Empty);
            return;
        };

        self.set_preview(
            state,
            PreviewState::Loading {
                place_id: place.id.clone(),
            },
        );

        let shared = Arc::downgrade(self);
        let previews = self.previews.clone();
        let task = spawn_on(self.spawner.as_ref(), async move {
            let result = settle_optional("preview", previews.preview(&place).await);
            if let Some(shared) = shared.upgrade() {
                shared.apply_preview(&place.id, result);
            }
        });
        state.preview_task = Some(task);
    }

    /// Cancel the running fetch. A preview still loading becomes unavailable.
    pub(super) fn abandon_preview(&self, state: &mut ControllerState) {
        if let Some(task) = state.preview_task.take() {
            task.cancel();
        }
        if let PreviewState::Loading { place_id } = &state.preview {
            let place_id = place_id.clone();
            self.set_preview(state, PreviewState::Unavailable { place_id });
        }
    }

    fn apply_preview(&self, place_id: &PlaceId, result: Result<PreviewHandle, NoData>) {
        let mut state = self.lock_state();
        let current = state.selected.as_ref().map(|place| &place.id);
        let awaited = matches!(
            &state.preview,
            PreviewState::Loading { place_id: loading } if loading == place_id
        );
        if current != Some(place_id) || !awaited {
            log::debug!("discarding stale preview for {place_id}");
            return;
        }

        let preview = match result {
            Ok(handle) => PreviewState::Ready { handle },
            Err(_) => PreviewState::Unavailable {
                place_id: place_id.clone(),
            },
        };
        self.set_preview(&mut state, preview);
    }
}

impl MapController {
    /// Preview of the current selection
    pub fn preview(&self) -> PreviewState {
        self.inner.lock_state().preview.clone()
    }
}
