use super::{request::RequestKind, state::InteractionMode, MapController};
use crate::{
    core::route::{RouteGeometry, RouteState},
    input::events::{CameraFit, ControllerEvent},
    providers::settle_optional,
};
use serde::{Deserialize, Serialize};

/// Why a route operation did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoSelection,
    RouteAlreadyActive,
    NoActiveRoute,
}

/// Result of [`MapController::start_route`] and [`MapController::end_route`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    /// The route is active; without geometry it is shown but not framed
    Started { has_geometry: bool },
    Ended,
    Skipped(SkipReason),
    /// A newer route request (or ending the route) made this result stale
    Superseded,
}

impl MapController {
    /// Route from the configured origin to the selected place.
    ///
    /// Does nothing without a selection or while a route is active. The route
    /// becomes active whether or not directions were found. When called again
    /// before an earlier call completes, only the latest call's result is
    /// applied.
    pub async fn start_route(&self) -> RouteOutcome {
        let (token, destination) = {
            let mut state = self.inner.lock_state();
            let Some(destination) = state.selected.clone() else {
                log::debug!("start route skipped: nothing selected");
                return RouteOutcome::Skipped(SkipReason::NoSelection);
            };
            if state.route.is_active() {
                log::debug!("start route skipped: route already active");
                return RouteOutcome::Skipped(SkipReason::RouteAlreadyActive);
            }
            (state.requests.issue(RequestKind::Route), destination)
        };

        log::info!("requesting route to {} ({})", destination.name, destination.id);
        let origin = self.inner.config.route_origin;
        let geometry: Option<RouteGeometry> = settle_optional(
            "directions",
            self.inner
                .directions
                .route(origin, destination.coordinate)
                .await,
        )
        .ok();

        let mut state = self.inner.lock_state();
        if !state.requests.is_current(token) {
            log::debug!("discarding superseded route to {}", destination.id);
            return RouteOutcome::Superseded;
        }

        let has_geometry = geometry.is_some();
        let fit = geometry
            .as_ref()
            .and_then(RouteGeometry::bounds)
            .map(|bounds| CameraFit::RouteBounds {
                bounds,
                padding: self.inner.config.fit_padding,
            });

        state.route = RouteState::Active {
            geometry,
            destination,
        };
        self.inner.emit(ControllerEvent::RouteChanged {
            active: true,
            has_geometry,
        });
        self.inner.set_mode(&mut state, InteractionMode::Routing);
        if let Some(fit) = fit {
            self.inner.emit(ControllerEvent::CameraFit { fit });
        }
        log::info!("route active (geometry: {has_geometry})");
        RouteOutcome::Started { has_geometry }
    }

    /// End the active route: back to browsing, the former destination
    /// selected again with its details shown, and the camera reset to the
    /// default region. All of it happens in one step.
    pub fn end_route(&self) -> RouteOutcome {
        let mut state = self.inner.lock_state();
        let RouteState::Active { destination, .. } = std::mem::take(&mut state.route) else {
            log::debug!("end route skipped: no active route");
            return RouteOutcome::Skipped(SkipReason::NoActiveRoute);
        };

        state.requests.invalidate(RequestKind::Route);
        self.inner.emit(ControllerEvent::RouteChanged {
            active: false,
            has_geometry: false,
        });
        self.inner.set_mode(&mut state, InteractionMode::Browsing);
        self.inner.set_selection(&mut state, Some(destination));
        self.inner.emit(ControllerEvent::CameraFit {
            fit: CameraFit::DefaultRegion {
                region: self.inner.config.default_region,
            },
        });
        log::info!("route ended");
        RouteOutcome::Ended
    }

    pub fn route_state(&self) -> RouteState {
        self.inner.lock_state().route.clone()
    }
}
