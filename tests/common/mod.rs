//! Controllable test doubles for the controller's providers.
//!
//! Gated providers park every call until the test releases it by key, so a
//! test decides the exact order in which overlapping responses arrive.

#![allow(dead_code)]

use async_trait::async_trait;
use futures::channel::oneshot;
use mapnav::{
    prelude::*,
    providers::memory::{StaticPlaces, StaticPreviews, StraightLineDirections},
};
use std::result::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Yield to the runtime until spawned work and woken futures have run
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}

pub fn place(id: &str, name: &str, lat: f64, lng: f64) -> Place {
    Place::new(id, name, LatLng::new(lat, lng))
}

pub fn coffee_places() -> Vec<Place> {
    vec![
        place("blue-bottle", "Blue Bottle Coffee", 37.7825, -122.4075),
        place("sightglass", "Sightglass Coffee", 37.7770, -122.4085),
        place("ritual", "Ritual Coffee Roasters", 37.7565, -122.4216),
    ]
}

pub struct Gate<T> {
    pending: Mutex<Vec<(String, oneshot::Sender<T>)>>,
    calls: AtomicUsize,
}

impl<T> Default for Gate<T> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<T> Gate<T> {
    /// Park until released; `None` if the gate side was dropped
    pub async fn wait(&self, key: String) -> Option<T> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push((key, tx));
        self.calls.fetch_add(1, Ordering::SeqCst);
        rx.await.ok()
    }

    /// Deliver `value` to the oldest call parked under `key`. Returns false
    /// when no such call exists or its caller has gone away.
    pub fn release(&self, key: &str, value: T) -> bool {
        let sender = {
            let mut pending = self.pending.lock().unwrap();
            match pending.iter().position(|(k, _)| k == key) {
                Some(index) => pending.remove(index).1,
                None => return false,
            }
        };
        sender.send(value).is_ok()
    }

    pub fn pending_keys(&self) -> Vec<String> {
        self.pending
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Search parked under the query text
#[derive(Default)]
pub struct GatedPlaces {
    pub gate: Gate<Result<Vec<Place>, ProviderError>>,
}

#[async_trait]
impl PlacesSearch for GatedPlaces {
    async fn search(&self, query: &str, _region: &Region) -> Result<Vec<Place>, ProviderError> {
        self.gate
            .wait(query.to_string())
            .await
            .unwrap_or_else(|| Err(ProviderError::Unavailable("gate dropped".to_string())))
    }
}

/// Directions parked under `route-N`, N counting calls from zero
#[derive(Default)]
pub struct GatedDirections {
    pub gate: Gate<Result<Option<RouteGeometry>, ProviderError>>,
}

#[async_trait]
impl Directions for GatedDirections {
    async fn route(
        &self,
        _from: LatLng,
        _to: LatLng,
    ) -> Result<Option<RouteGeometry>, ProviderError> {
        let key = format!("route-{}", self.gate.calls());
        self.gate
            .wait(key)
            .await
            .unwrap_or_else(|| Err(ProviderError::Unavailable("gate dropped".to_string())))
    }
}

/// Previews parked under the place id
#[derive(Default)]
pub struct GatedPreviews {
    pub gate: Gate<Result<Option<PreviewHandle>, ProviderError>>,
}

impl GatedPreviews {
    pub fn release_ready(&self, id: &str) -> bool {
        self.gate.release(
            id,
            Ok(Some(PreviewHandle::new(PlaceId::new(id), format!("preview://{id}")))),
        )
    }
}

#[async_trait]
impl PreviewService for GatedPreviews {
    async fn preview(&self, place: &Place) -> Result<Option<PreviewHandle>, ProviderError> {
        self.gate
            .wait(place.id.to_string())
            .await
            .unwrap_or_else(|| Err(ProviderError::Unavailable("gate dropped".to_string())))
    }
}

/// Every call fails
pub struct FailingProvider;

#[async_trait]
impl PlacesSearch for FailingProvider {
    async fn search(&self, _query: &str, _region: &Region) -> Result<Vec<Place>, ProviderError> {
        Err(ProviderError::Unavailable("offline".to_string()))
    }
}

#[async_trait]
impl Directions for FailingProvider {
    async fn route(
        &self,
        _from: LatLng,
        _to: LatLng,
    ) -> Result<Option<RouteGeometry>, ProviderError> {
        Err(ProviderError::Timeout)
    }
}

#[async_trait]
impl PreviewService for FailingProvider {
    async fn preview(&self, _place: &Place) -> Result<Option<PreviewHandle>, ProviderError> {
        Err(ProviderError::InvalidResponse("corrupt".to_string()))
    }
}

/// Spawns on tokio but ignores cancellation, so superseded work runs to
/// completion and must be rejected by the controller itself
pub struct DetachedSpawner;

struct DetachedHandle(tokio::task::JoinHandle<()>);

impl AsyncHandle for DetachedHandle {
    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    fn cancel(&self) {}
}

impl AsyncSpawner for DetachedSpawner {
    fn spawn_boxed(
        &self,
        future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
    ) -> Box<dyn AsyncHandle> {
        Box::new(DetachedHandle(tokio::spawn(future)))
    }
}

/// Controller over in-memory providers with previews for every coffee place
pub fn static_controller() -> MapController {
    let previews = coffee_places()
        .into_iter()
        .fold(StaticPreviews::new(), |previews, place| {
            let uri = format!("preview://{}", place.id);
            previews.with_preview(place.id, uri)
        });

    MapControllerBuilder::new()
        .with_places(StaticPlaces::new(coffee_places()))
        .with_directions(StraightLineDirections::default())
        .with_previews(previews)
        .build()
        .unwrap()
}
