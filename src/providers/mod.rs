//! External collaborators the controller talks to.
//!
//! Each provider is an async trait so hosts can plug in a real mapping
//! service, a cache, or a test double. Provider failures never reach the
//! caller of the controller: [`settle_list`] and [`settle_optional`] fold
//! both "the service failed" and "the service had nothing" into [`NoData`].

pub mod memory;

use crate::core::{
    geo::LatLng,
    place::Place,
    preview::PreviewHandle,
    region::Region,
    route::RouteGeometry,
};
use async_trait::async_trait;

/// Errors a provider may report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider timed out")]
    Timeout,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Why a provider call produced nothing usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoData {
    ProviderUnavailable,
    EmptyResult,
}

/// Free-text place search biased toward a region
#[async_trait]
pub trait PlacesSearch: Send + Sync {
    async fn search(&self, query: &str, region: &Region) -> Result<Vec<Place>, ProviderError>;
}

/// Directions between two coordinates
#[async_trait]
pub trait Directions: Send + Sync {
    /// `Ok(None)` means the service found no route
    async fn route(
        &self,
        from: LatLng,
        to: LatLng,
    ) -> Result<Option<RouteGeometry>, ProviderError>;
}

/// Visual previews of places
#[async_trait]
pub trait PreviewService: Send + Sync {
    async fn preview(&self, place: &Place) -> Result<Option<PreviewHandle>, ProviderError>;
}

/// Collapses a list-returning provider call; an empty list counts as no data
pub fn settle_list<T>(
    what: &str,
    result: Result<Vec<T>, ProviderError>,
) -> Result<Vec<T>, NoData> {
    match result {
        Ok(items) if items.is_empty() => {
            log::debug!("{what}: empty result");
            Err(NoData::EmptyResult)
        }
        Ok(items) => Ok(items),
        Err(err) => {
            log::warn!("{what}: {err}");
            Err(NoData::ProviderUnavailable)
        }
    }
}

/// Collapses an optional-returning provider call
pub fn settle_optional<T>(
    what: &str,
    result: Result<Option<T>, ProviderError>,
) -> Result<T, NoData> {
    match result {
        Ok(Some(value)) => Ok(value),
        Ok(None) => {
            log::debug!("{what}: empty result");
            Err(NoData::EmptyResult)
        }
        Err(err) => {
            log::warn!("{what}: {err}");
            Err(NoData::ProviderUnavailable)
        }
    }
}
