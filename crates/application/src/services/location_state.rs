//! Location coordinator
//!
//! Owns the [`TripPlan`] and is the only place that mutates it. Lookups run
//! without holding the lock; results are applied only if the request that
//! produced them is still the latest for its endpoint. Every failure is
//! turned into a [`Notice`] here and never propagates to callers.

use std::fmt;
use std::sync::Arc;

use domain::entities::TripPlan;
use domain::value_objects::{ClickedPoint, Coordinate, Endpoint, NamedLocation};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, MapRendererPort, NoticePort, RoutingPort};
use crate::services::geolocation_provider::GeolocationProvider;
use crate::services::map_view::MapSnapshot;
use crate::services::notice::{Notice, NoticeKind};

/// Result of a coordinator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The plan changed
    Applied,
    /// The result belonged to a superseded request and was dropped
    Superseded,
    /// The operation was not started
    Ignored,
    /// The operation failed and a notice was published
    Failed(NoticeKind),
}

impl Outcome {
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Coordinates geocoding, geolocation and routing against one trip plan
pub struct LocationState {
    plan: Mutex<TripPlan>,
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    geolocation: GeolocationProvider,
    notices: Arc<dyn NoticePort>,
    renderer: Option<Arc<dyn MapRendererPort>>,
}

impl fmt::Debug for LocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationState")
            .field("plan", &*self.plan.lock())
            .field("geolocation", &self.geolocation)
            .field("has_renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

impl LocationState {
    pub fn new(
        plan: TripPlan,
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        geolocation: GeolocationProvider,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            plan: Mutex::new(plan),
            geocoder,
            router,
            geolocation,
            notices,
            renderer: None,
        }
    }

    /// Redraw `renderer` after every applied transition
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn MapRendererPort>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// A copy of the current plan
    pub fn plan(&self) -> TripPlan {
        self.plan.lock().clone()
    }

    /// Display state derived from the current plan
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot::from_plan(&self.plan.lock())
    }

    fn render(&self) {
        if let Some(renderer) = &self.renderer {
            let snapshot = self.snapshot();
            renderer.render(&snapshot);
        }
    }

    fn raise(&self, notice: Notice) -> Outcome {
        let kind = notice.kind;
        self.notices.publish(notice);
        Outcome::Failed(kind)
    }

    /// Replace the typed label of an endpoint
    ///
    /// The coordinate is left alone until [`commit_geocode`](Self::commit_geocode).
    pub fn set_location_text(&self, which: Endpoint, text: &str) {
        self.plan.lock().set_label(which, text);
        self.render();
    }

    /// Resolve the endpoint's current label and apply the coordinate
    ///
    /// On failure the endpoint keeps its previous coordinate.
    #[instrument(skip(self))]
    pub async fn commit_geocode(&self, which: Endpoint) -> Outcome {
        let (label, token) = {
            let mut plan = self.plan.lock();
            let label = plan.endpoint(which).label.clone();
            (label, plan.issue_token(which))
        };

        debug!(%token, %label, "Geocoding endpoint");

        match self.geocoder.resolve(&label).await {
            Ok(coord) => {
                let applied = self.plan.lock().apply_coordinate(which, token, coord);
                if applied {
                    info!(%which, %coord, "Endpoint resolved");
                    self.render();
                    Outcome::Applied
                } else {
                    debug!(%which, %token, "Dropping superseded geocode result");
                    Outcome::Superseded
                }
            },
            Err(ApplicationError::NotFound(_)) => {
                warn!(%which, %label, "Address not found");
                self.raise(Notice::address_not_found(&label))
            },
            Err(ApplicationError::ServiceUnavailable(detail)) => {
                warn!(%which, %detail, "Geocoding service unavailable");
                self.raise(Notice::service_unavailable("Geocoding", &detail))
            },
            Err(e) => {
                warn!(%which, error = %e, "Geocoding failed");
                self.raise(Notice::service_unavailable("Geocoding", &e.to_string()))
            },
        }
    }

    /// Set the start endpoint to the device position
    ///
    /// Ignored while an earlier request is still outstanding.
    #[instrument(skip(self))]
    pub async fn use_current_location(&self) -> Outcome {
        if !self.geolocation.is_supported() {
            warn!("Device has no position capability");
            return self.raise(Notice::geolocation_unsupported());
        }

        let token = {
            let mut plan = self.plan.lock();
            if !plan.begin_locating() {
                debug!("Geolocation already in progress");
                return Outcome::Ignored;
            }
            plan.issue_token(Endpoint::Start)
        };
        self.render();

        let result = self
            .geolocation
            .locate(|_| self.notices.publish(Notice::geolocation_retrying()))
            .await;

        let outcome = match result {
            Ok(coord) => {
                let mut plan = self.plan.lock();
                plan.finish_locating();
                if plan.apply_location(Endpoint::Start, token, NamedLocation::current_location(coord)) {
                    info!(%coord, "Start set to current location");
                    Outcome::Applied
                } else {
                    debug!(%token, "Dropping superseded position fix");
                    Outcome::Superseded
                }
            },
            Err(e) => {
                self.plan.lock().finish_locating();
                warn!(error = %e, "Geolocation failed");
                match e {
                    ApplicationError::Unavailable(reason) => {
                        self.raise(Notice::geolocation_failed(&reason))
                    },
                    other => self.raise(Notice::geolocation_failed(&other.to_string())),
                }
            },
        };
        self.render();
        outcome
    }

    /// Exchange start and destination
    ///
    /// Outstanding lookups for either endpoint are invalidated.
    pub fn swap(&self) -> Outcome {
        self.plan.lock().swap();
        debug!("Endpoints swapped");
        self.render();
        Outcome::Applied
    }

    /// Compute route metrics for the current endpoints
    ///
    /// On failure the previous metrics, if any, are kept. Metrics for a pair
    /// that changed while the lookup was running are dropped.
    #[instrument(skip(self))]
    pub async fn search(&self) -> Outcome {
        let ticket = self.plan.lock().route_ticket();

        match self.router.route(ticket.from, ticket.to).await {
            Ok(metrics) => {
                let stored = self.plan.lock().store_metrics(ticket, metrics);
                if stored {
                    info!(%metrics, "Route computed");
                    self.render();
                    Outcome::Applied
                } else {
                    debug!("Dropping route for a superseded endpoint pair");
                    Outcome::Superseded
                }
            },
            Err(ApplicationError::RouteNotFound(detail)) => {
                warn!(%detail, "No route between endpoints");
                self.raise(Notice::route_not_found())
            },
            Err(ApplicationError::ServiceUnavailable(detail)) => {
                warn!(%detail, "Routing service unavailable");
                self.raise(Notice::service_unavailable("Routing", &detail))
            },
            Err(e) => {
                warn!(error = %e, "Routing failed");
                self.raise(Notice::service_unavailable("Routing", &e.to_string()))
            },
        }
    }

    /// Record a map click without touching either endpoint
    pub fn record_map_click(&self, raw: Coordinate) -> ClickedPoint {
        let point = self.plan.lock().record_click(raw);
        debug!(%point, "Map clicked");
        self.render();
        point
    }
}
