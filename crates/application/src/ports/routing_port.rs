//! Routing port
//!
//! Computes driving distance and duration between two coordinates.

use async_trait::async_trait;
use domain::value_objects::{Coordinate, RouteMetrics};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute the metrics of the best route from `from` to `to`
    ///
    /// Returns [`ApplicationError::RouteNotFound`] when the service reports no
    /// route and [`ApplicationError::ServiceUnavailable`] for any other failure.
    async fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<RouteMetrics, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn RoutingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn RoutingPort>();
    }

    #[tokio::test]
    async fn mock_returns_metrics() {
        let mut mock = MockRoutingPort::new();
        mock.expect_route()
            .withf(|from, to| *from == Coordinate::pune() && *to == Coordinate::mumbai())
            .returning(|_, _| Ok(RouteMetrics::from_meters_seconds(150_000.0, 9_000.0)));

        let metrics = mock
            .route(Coordinate::pune(), Coordinate::mumbai())
            .await
            .unwrap();
        assert_eq!(metrics.to_string(), "Distance: 150.00 km | Time: 150 mins");
    }
}
