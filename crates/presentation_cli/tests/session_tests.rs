//! End-to-end session and route tests with in-memory services

use std::sync::Arc;
use std::time::Duration;

use application::{
    ApplicationError, GeocodingPort, GeolocationProvider, LocationState, PositionError,
    PositionOptions, PositionSourcePort, RoutingPort,
};
use async_trait::async_trait;
use domain::{Coordinate, LocatingStatus, RouteMetrics, TripPlan};
use infrastructure::{FixedPositionSource, UnsupportedPositionSource};
use presentation_cli::console::{ConsoleNotices, TextMapRenderer};
use presentation_cli::route::{StartPoint, run_route};
use presentation_cli::session::run_session;

struct Gazetteer;

#[async_trait]
impl GeocodingPort for Gazetteer {
    async fn resolve(&self, address: &str) -> Result<Coordinate, ApplicationError> {
        match address {
            "Pune" => Ok(Coordinate::pune()),
            "Mumbai" => Ok(Coordinate::mumbai()),
            "Lonavala" => Ok(Coordinate::new(18.75, 73.4).unwrap()),
            other => Err(ApplicationError::NotFound(other.to_string())),
        }
    }
}

struct StraightRouter;

#[async_trait]
impl RoutingPort for StraightRouter {
    async fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteMetrics, ApplicationError> {
        if from == to {
            return Err(ApplicationError::RouteNotFound("same point".to_string()));
        }
        Ok(RouteMetrics::from_meters_seconds(150_000.0, 9_000.0))
    }
}

fn state(notices: Arc<ConsoleNotices<Vec<u8>>>, has_position: bool) -> LocationState {
    let geolocation = if has_position {
        GeolocationProvider::new(Arc::new(FixedPositionSource::new(
            Coordinate::new(18.6, 73.9).unwrap(),
        )))
    } else {
        GeolocationProvider::new(Arc::new(UnsupportedPositionSource))
    };

    LocationState::new(
        TripPlan::default(),
        Arc::new(Gazetteer),
        Arc::new(StraightRouter),
        geolocation,
        notices,
    )
}

async fn run_script(state: &LocationState, script: &str) -> (String, String) {
    let renderer = TextMapRenderer::new(Vec::new());
    let mut output = Vec::new();

    run_session(state, &renderer, script.as_bytes(), &mut output)
        .await
        .unwrap();

    (String::from_utf8(output).unwrap(), renderer.contents())
}

#[tokio::test]
async fn route_between_addresses() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = state(notices.clone(), false);

    let outcome = run_route(&state, StartPoint::Address("Pune".to_string()), "Mumbai").await;

    assert!(!outcome.is_failure());
    assert_eq!(notices.error_count(), 0);
    assert_eq!(
        state.snapshot().metrics_line().as_deref(),
        Some("Distance: 150.00 km | Time: 150 mins")
    );
}

#[tokio::test]
async fn route_stops_at_unknown_address() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = state(notices.clone(), false);

    let outcome = run_route(&state, StartPoint::Address("Pune".to_string()), "Nowhereville").await;

    assert!(outcome.is_failure());
    assert_eq!(notices.error_count(), 1);
    assert!(notices.contents().contains("Location \"Nowhereville\" not found."));
    assert!(state.plan().metrics().is_none());
}

#[tokio::test]
async fn route_from_unsupported_current_location_fails() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = state(notices.clone(), false);

    let outcome = run_route(&state, StartPoint::CurrentLocation, "Mumbai").await;

    assert!(outcome.is_failure());
    assert!(notices
        .contents()
        .contains("Geolocation is not supported by your device."));
}

#[tokio::test]
async fn session_script_plans_a_route() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = state(notices.clone(), true);

    let (output, rendered) = run_script(
        &state,
        "start Lonavala\ndest Mumbai\nsearch\nclick 18.520434 73.856743\nquit\n",
    )
    .await;

    assert!(output.starts_with("Route planner session."));
    assert!(output.ends_with("Bye.\n"));
    assert!(rendered.contains("Start: Lonavala @ 18.750000, 73.400000"));
    assert!(rendered.contains("Distance: 150.00 km | Time: 150 mins"));
    assert!(rendered.contains("Clicked Location: [18.52043, 73.85674]"));
    assert_eq!(notices.error_count(), 0);
}

#[tokio::test]
async fn session_here_and_swap() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = state(notices.clone(), true);

    let _ = run_script(&state, "here\nswap\n").await;

    let plan = state.plan();
    assert_eq!(plan.destination().label, "My Current Location");
    assert_eq!(plan.destination().coord, Coordinate::new(18.6, 73.9).unwrap());
    assert_eq!(plan.start().coord, Coordinate::mumbai());
}

#[tokio::test]
async fn session_reports_bad_input_and_keeps_going() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = state(notices.clone(), true);

    let (output, _) = run_script(&state, "teleport\nclick 95 10\nhelp\nstart Nowhereville\n").await;

    assert!(output.contains("Unknown command 'teleport'"));
    assert!(output.contains("Invalid coordinates"));
    assert!(output.contains("click <lat> <lon>"));
    assert!(notices.contents().contains("Location \"Nowhereville\" not found."));
    assert_eq!(state.plan().start().coord, Coordinate::pune());
}

/// A device that never reports a position
struct SilentPosition;

#[async_trait]
impl PositionSourcePort for SilentPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, PositionError> {
        std::future::pending().await
    }
}

/// Answers like [`Gazetteer`] after a fixed delay
struct SlowGazetteer;

#[async_trait]
impl GeocodingPort for SlowGazetteer {
    async fn resolve(&self, address: &str) -> Result<Coordinate, ApplicationError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Gazetteer.resolve(address).await
    }
}

#[tokio::test(start_paused = true)]
async fn session_accepts_commands_while_locating() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = LocationState::new(
        TripPlan::default(),
        Arc::new(Gazetteer),
        Arc::new(StraightRouter),
        GeolocationProvider::new(Arc::new(SilentPosition)),
        notices.clone(),
    );

    let (output, _) = run_script(&state, "here\nhere\nclick 18.5 73.8\n").await;

    assert_eq!(output.matches("Still locating, please wait.").count(), 1);
    assert_eq!(
        state.plan().clicked_point().map(|p| p.coord()),
        Some(Coordinate::new(18.5, 73.8).unwrap())
    );
    assert!(notices.contents().contains("Location request timed out. Retrying..."));
    assert_eq!(notices.error_count(), 1);
    assert_eq!(state.plan().locating_status(), LocatingStatus::Idle);
    assert_eq!(state.plan().start().coord, Coordinate::pune());
}

#[tokio::test(start_paused = true)]
async fn session_swap_during_lookup_drops_its_result() {
    let notices = Arc::new(ConsoleNotices::new(Vec::new()));
    let state = LocationState::new(
        TripPlan::default(),
        Arc::new(SlowGazetteer),
        Arc::new(StraightRouter),
        GeolocationProvider::new(Arc::new(UnsupportedPositionSource)),
        notices.clone(),
    );

    let (output, _) = run_script(&state, "start Lonavala\nswap\n").await;

    assert!(output.ends_with("Bye.\n"));
    let plan = state.plan();
    assert_eq!(plan.start().coord, Coordinate::mumbai());
    assert_eq!(plan.destination().label, "Lonavala");
    assert_eq!(plan.destination().coord, Coordinate::pune());
    assert_eq!(notices.error_count(), 0);
}
