use super::{
    request::RequestKind,
    state::{ControllerState, SearchState},
    MapController, Shared,
};
use crate::{
    core::{place::Place, region::Region},
    input::events::ControllerEvent,
    providers::settle_list,
};

impl Shared {
    fn emit_search(&self, state: &ControllerState) {
        self.emit(ControllerEvent::SearchChanged {
            query: state.search.query.clone(),
            committed: state.search.committed,
            candidate_count: state.search.candidates.len(),
        });
    }
}

impl MapController {
    /// Edit the query text without submitting it
    pub fn set_query_text(&self, text: impl Into<String>) {
        let text = text.into();
        let mut state = self.inner.lock_state();
        if state.search.query == text && !state.search.committed {
            return;
        }
        state.search.query = text;
        state.search.committed = false;
        self.inner.emit_search(&state);
    }

    /// Run a search biased toward `bias_region` and replace the candidates
    /// with its results.
    ///
    /// A blank query changes nothing. A failed or empty search leaves no
    /// candidates. If another search is submitted before this one completes,
    /// this one's results are dropped and the current candidates returned.
    pub async fn submit_search(&self, query: &str, bias_region: Region) -> Vec<Place> {
        let trimmed = query.trim();
        let token = {
            let mut state = self.inner.lock_state();
            if trimmed.is_empty() {
                log::debug!("ignoring blank search");
                return state.search.candidates.clone();
            }
            state.search.query = query.to_string();
            state.search.committed = true;
            self.inner.emit_search(&state);
            state.requests.issue(RequestKind::Search)
        };

        log::debug!("searching for {trimmed:?}");
        let outcome = settle_list("search", self.inner.places.search(trimmed, &bias_region).await);
        let mut candidates = match outcome {
            Ok(places) => places,
            Err(reason) => {
                log::debug!("search for {trimmed:?} produced no data: {reason:?}");
                Vec::new()
            }
        };
        if let Some(max) = self.inner.config.max_candidates {
            candidates.truncate(max);
        }

        let mut state = self.inner.lock_state();
        if !state.requests.is_current(token) {
            log::debug!("discarding superseded search for {trimmed:?}");
            return state.search.candidates.clone();
        }
        state.search.candidates = candidates.clone();
        self.inner.emit_search(&state);
        candidates
    }

    /// Search biased toward the visible region, or the default region before
    /// the renderer has reported one
    pub async fn submit_search_in_view(&self, query: &str) -> Vec<Place> {
        let region = self
            .view_region()
            .unwrap_or(self.inner.config.default_region);
        self.submit_search(query, region).await
    }

    /// Leave search: drop the query and candidates and close the details of
    /// the selected place. An active route is left alone.
    pub fn exit_search(&self) {
        let mut state = self.inner.lock_state();
        state.requests.invalidate(RequestKind::Search);
        state.search = SearchState::default();
        self.inner.emit_search(&state);
        self.inner.set_selection(&mut state, None);
    }

    pub fn search_state(&self) -> SearchState {
        self.inner.lock_state().search.clone()
    }

    pub fn candidates(&self) -> Vec<Place> {
        self.inner.lock_state().search.candidates.clone()
    }
}
