use crate::core::place::PlaceId;
use serde::{Deserialize, Serialize};

/// Opaque reference to a visual preview of a place, such as a street-level
/// scene. The controller never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewHandle {
    pub place_id: PlaceId,
    pub uri: String,
}

impl PreviewHandle {
    pub fn new(place_id: PlaceId, uri: impl Into<String>) -> Self {
        Self {
            place_id,
            uri: uri.into(),
        }
    }
}

/// Preview for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreviewState {
    /// Nothing selected
    #[default]
    Empty,
    Loading {
        place_id: PlaceId,
    },
    Ready {
        handle: PreviewHandle,
    },
    /// The provider had nothing for this place, or failed
    Unavailable {
        place_id: PlaceId,
    },
}

impl PreviewState {
    /// The resolved handle, if any
    pub fn handle(&self) -> Option<&PreviewHandle> {
        match self {
            PreviewState::Ready { handle } => Some(handle),
            _ => None,
        }
    }

    /// The place this state refers to
    pub fn place_id(&self) -> Option<&PlaceId> {
        match self {
            PreviewState::Empty => None,
            PreviewState::Loading { place_id } | PreviewState::Unavailable { place_id } => {
                Some(place_id)
            }
            PreviewState::Ready { handle } => Some(&handle.place_id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PreviewState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_state_accessors() {
        let id = PlaceId::new("p1");
        assert!(PreviewState::Empty.handle().is_none());
        assert!(PreviewState::Empty.place_id().is_none());

        let loading = PreviewState::Loading {
            place_id: id.clone(),
        };
        assert!(loading.is_loading());
        assert_eq!(loading.place_id(), Some(&id));
        assert!(loading.handle().is_none());

        let ready = PreviewState::Ready {
            handle: PreviewHandle::new(id.clone(), "preview://p1"),
        };
        assert_eq!(ready.handle().map(|h| h.uri.as_str()), Some("preview://p1"));
        assert_eq!(ready.place_id(), Some(&id));
    }

    #[test]
    fn test_preview_state_serialization() {
        let json = serde_json::to_value(PreviewState::Unavailable {
            place_id: PlaceId::new("p9"),
        })
        .unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["place_id"], "p9");
    }
}
