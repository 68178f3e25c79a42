//! One-shot route lookup

use application::{LocationState, Outcome};
use domain::Endpoint;
use tracing::debug;

/// Where the route starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPoint {
    Address(String),
    CurrentLocation,
}

/// Resolve both endpoints, then search
///
/// Stops at the first failed step; the failure has already been published as
/// a notice. Returns the outcome of the last step that ran.
pub async fn run_route(state: &LocationState, start: StartPoint, destination: &str) -> Outcome {
    let start_outcome = match start {
        StartPoint::Address(address) => {
            state.set_location_text(Endpoint::Start, &address);
            state.commit_geocode(Endpoint::Start).await
        },
        StartPoint::CurrentLocation => state.use_current_location().await,
    };
    if start_outcome.is_failure() {
        return start_outcome;
    }

    state.set_location_text(Endpoint::Destination, destination);
    let destination_outcome = state.commit_geocode(Endpoint::Destination).await;
    if destination_outcome.is_failure() {
        return destination_outcome;
    }

    let outcome = state.search().await;
    debug!(?outcome, "Route search finished");
    outcome
}
