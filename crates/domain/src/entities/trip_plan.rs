//! Trip plan entity - start/destination pair with derived route state
//!
//! All mutation goes through the transition methods below. Any change to
//! an endpoint coordinate clears the cached [`RouteMetrics`] in the same
//! call, so metrics always describe the current pair.

use serde::{Deserialize, Serialize};

use crate::value_objects::{
    ClickedPoint, Coordinate, Endpoint, LocatingStatus, NamedLocation, RequestToken, RouteMetrics,
};

/// Snapshot of the endpoint pair used to validate a route result
///
/// Obtained from [`TripPlan::route_ticket`] before a route lookup and handed
/// back to [`TripPlan::store_metrics`] with the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTicket {
    epoch: u64,
    /// Start coordinate at ticket time
    pub from: Coordinate,
    /// Destination coordinate at ticket time
    pub to: Coordinate,
}

/// The two endpoints, the clicked point, and derived route metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    start: NamedLocation,
    destination: NamedLocation,
    clicked: Option<ClickedPoint>,
    metrics: Option<RouteMetrics>,
    locating: LocatingStatus,
    start_token: RequestToken,
    destination_token: RequestToken,
    /// Bumped on every endpoint coordinate change
    epoch: u64,
    /// Bumped on every applied transition
    revision: u64,
}

impl Default for TripPlan {
    fn default() -> Self {
        Self::new(
            NamedLocation::unlabelled(Coordinate::pune()),
            NamedLocation::unlabelled(Coordinate::mumbai()),
        )
    }
}

impl TripPlan {
    /// Create a plan with the given initial endpoints
    #[must_use]
    pub fn new(start: NamedLocation, destination: NamedLocation) -> Self {
        Self {
            start,
            destination,
            clicked: None,
            metrics: None,
            locating: LocatingStatus::Idle,
            start_token: RequestToken::default(),
            destination_token: RequestToken::default(),
            epoch: 0,
            revision: 0,
        }
    }

    /// The start endpoint
    #[must_use]
    pub const fn start(&self) -> &NamedLocation {
        &self.start
    }

    /// The destination endpoint
    #[must_use]
    pub const fn destination(&self) -> &NamedLocation {
        &self.destination
    }

    /// Either endpoint
    #[must_use]
    pub const fn endpoint(&self, which: Endpoint) -> &NamedLocation {
        match which {
            Endpoint::Start => &self.start,
            Endpoint::Destination => &self.destination,
        }
    }

    /// The last map click, if any
    #[must_use]
    pub const fn clicked_point(&self) -> Option<ClickedPoint> {
        self.clicked
    }

    /// Route metrics for the current pair, if a lookup succeeded
    #[must_use]
    pub const fn metrics(&self) -> Option<RouteMetrics> {
        self.metrics
    }

    /// Geolocation progress
    #[must_use]
    pub const fn locating_status(&self) -> LocatingStatus {
        self.locating
    }

    /// Number of applied transitions so far
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Latest token issued for an endpoint
    #[must_use]
    pub const fn latest_token(&self, which: Endpoint) -> RequestToken {
        match which {
            Endpoint::Start => self.start_token,
            Endpoint::Destination => self.destination_token,
        }
    }

    const fn endpoint_mut(&mut self, which: Endpoint) -> &mut NamedLocation {
        match which {
            Endpoint::Start => &mut self.start,
            Endpoint::Destination => &mut self.destination,
        }
    }

    const fn token_mut(&mut self, which: Endpoint) -> &mut RequestToken {
        match which {
            Endpoint::Start => &mut self.start_token,
            Endpoint::Destination => &mut self.destination_token,
        }
    }

    /// Replace an endpoint's label without touching its coordinate
    pub fn set_label(&mut self, which: Endpoint, text: impl Into<String>) {
        self.endpoint_mut(which).label = text.into();
        self.revision += 1;
    }

    /// Issue a fresh token for a resolution request on `which`
    ///
    /// Any earlier outstanding token for the endpoint becomes stale.
    pub fn issue_token(&mut self, which: Endpoint) -> RequestToken {
        let slot = self.token_mut(which);
        *slot = slot.next();
        *slot
    }

    /// Whether `token` is still the latest one for `which`
    #[must_use]
    pub fn is_current(&self, which: Endpoint, token: RequestToken) -> bool {
        self.latest_token(which) == token
    }

    fn invalidate_route(&mut self) {
        self.metrics = None;
        self.epoch += 1;
    }

    /// Apply a resolved coordinate, keeping the label
    ///
    /// Returns `false` and leaves the plan untouched if `token` is stale.
    #[must_use]
    pub fn apply_coordinate(
        &mut self,
        which: Endpoint,
        token: RequestToken,
        coord: Coordinate,
    ) -> bool {
        if !self.is_current(which, token) {
            return false;
        }
        self.endpoint_mut(which).coord = coord;
        self.invalidate_route();
        self.revision += 1;
        true
    }

    /// Apply a resolved coordinate together with a new label
    ///
    /// Returns `false` and leaves the plan untouched if `token` is stale.
    #[must_use]
    pub fn apply_location(
        &mut self,
        which: Endpoint,
        token: RequestToken,
        location: NamedLocation,
    ) -> bool {
        if !self.is_current(which, token) {
            return false;
        }
        *self.endpoint_mut(which) = location;
        self.invalidate_route();
        self.revision += 1;
        true
    }

    /// Exchange start and destination, labels and coordinates together
    ///
    /// Outstanding requests for either endpoint become stale.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.start, &mut self.destination);
        self.issue_token(Endpoint::Start);
        self.issue_token(Endpoint::Destination);
        self.invalidate_route();
        self.revision += 1;
    }

    /// Capture the current pair before a route lookup
    #[must_use]
    pub const fn route_ticket(&self) -> RouteTicket {
        RouteTicket {
            epoch: self.epoch,
            from: self.start.coord,
            to: self.destination.coord,
        }
    }

    /// Store route metrics obtained for `ticket`
    ///
    /// Returns `false` if either endpoint moved since the ticket was taken.
    #[must_use]
    pub fn store_metrics(&mut self, ticket: RouteTicket, metrics: RouteMetrics) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.metrics = Some(metrics);
        self.revision += 1;
        true
    }

    /// Mark a geolocation request as outstanding
    ///
    /// Returns `false` if one already is.
    #[must_use]
    pub fn begin_locating(&mut self) -> bool {
        if self.locating.is_in_progress() {
            return false;
        }
        self.locating = LocatingStatus::InProgress;
        self.revision += 1;
        true
    }

    /// Mark the outstanding geolocation request as finished
    pub fn finish_locating(&mut self) {
        if self.locating.is_in_progress() {
            self.locating = LocatingStatus::Idle;
            self.revision += 1;
        }
    }

    /// Record a map click, replacing any previous one
    pub fn record_click(&mut self, raw: Coordinate) -> ClickedPoint {
        let point = ClickedPoint::from_click(raw);
        self.clicked = Some(point);
        self.revision += 1;
        point
    }
}
