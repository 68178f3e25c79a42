//! Adapter tests against mocked Nominatim and OSRM servers

use application::{ApplicationError, GeocodingPort, RoutingPort};
use domain::Coordinate;
use infrastructure::{GeocodingAdapter, RoutingAdapter};
use integration_routing::{NominatimConfig, OsrmConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoding_adapter(server: &MockServer) -> GeocodingAdapter {
    GeocodingAdapter::from_config(&NominatimConfig {
        base_url: server.uri(),
        ..NominatimConfig::for_testing()
    })
    .unwrap()
}

fn routing_adapter(server: &MockServer) -> RoutingAdapter {
    RoutingAdapter::from_config(&OsrmConfig {
        base_url: server.uri(),
        ..OsrmConfig::for_testing()
    })
    .unwrap()
}

#[tokio::test]
async fn resolves_address() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Mumbai"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"lat": "19.0760", "lon": "72.8777"}]"#),
        )
        .mount(&server)
        .await;

    let coord = geocoding_adapter(&server).resolve("Mumbai").await.unwrap();

    assert_eq!(coord, Coordinate::mumbai());
}

#[tokio::test]
async fn empty_result_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let err = geocoding_adapter(&server)
        .resolve("Nowhereville")
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn non_numeric_coordinates_are_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"lat": "north", "lon": "east"}]"#),
        )
        .mount(&server)
        .await;

    let err = geocoding_adapter(&server).resolve("Mumbai").await.unwrap_err();

    assert!(matches!(err, ApplicationError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn route_metrics_are_rounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/73.8567,18.5204;72.8777,19.076"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"code": "Ok", "routes": [{"distance": 148734.6, "duration": 10013.0}]}"#,
        ))
        .mount(&server)
        .await;

    let metrics = routing_adapter(&server)
        .route(Coordinate::pune(), Coordinate::mumbai())
        .await
        .unwrap();

    assert_eq!(metrics.distance_display(), "148.73");
    assert_eq!(metrics.duration_display(), "167");
}

#[tokio::test]
async fn no_segment_is_route_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"code": "NoSegment", "message": "Could not find a matching segment"}"#),
        )
        .mount(&server)
        .await;

    let err = routing_adapter(&server)
        .route(Coordinate::pune(), Coordinate::mumbai())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::RouteNotFound(_)));
}

#[tokio::test]
async fn server_error_is_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = routing_adapter(&server)
        .route(Coordinate::pune(), Coordinate::mumbai())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ServiceUnavailable(_)));
}
