use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque identifier assigned to a place by the search provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceId(pub String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A point of interest returned by a search.
///
/// Two places are equal when their identifiers are equal; the name,
/// coordinate and address are descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub coordinate: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Place {
    pub fn new(id: impl Into<PlaceId>, name: impl Into<String>, coordinate: LatLng) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Whether `other` names the same place
    pub fn same_as(&self, other: &Place) -> bool {
        self.id == other.id
    }
}

impl From<String> for PlaceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Compares two optional selections by identity
pub fn same_selection(a: Option<&Place>, b: Option<&Place>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_as(b),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_equality_is_by_id() {
        let a = Place::new("p1", "Blue Bottle", LatLng::new(37.78, -122.41));
        let renamed = Place::new("p1", "Blue Bottle Coffee", LatLng::new(37.0, -122.0));
        let other = Place::new("p2", "Blue Bottle", LatLng::new(37.78, -122.41));

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn test_same_selection() {
        let a = Place::new("a", "A", LatLng::default());
        let b = Place::new("b", "B", LatLng::default());

        assert!(same_selection(None, None));
        assert!(same_selection(Some(&a), Some(&a.clone())));
        assert!(!same_selection(Some(&a), Some(&b)));
        assert!(!same_selection(Some(&a), None));
    }

    #[test]
    fn test_place_serialization() {
        let place = Place::new("p1", "Ritual", LatLng::new(37.76, -122.42)).with_address("Valencia St");
        let json = serde_json::to_string(&place).unwrap();
        assert!(json.contains("\"id\":\"p1\""));
        assert!(json.contains("Valencia St"));

        let bare = serde_json::to_string(&Place::new("p2", "Sightglass", LatLng::default())).unwrap();
        assert!(!bare.contains("address"));
    }
}
