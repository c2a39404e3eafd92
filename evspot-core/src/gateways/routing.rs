use anyhow::Result as Fallible;

use crate::entities::MapPoint;

/// A driving route between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    /// Meters
    pub distance: f64,
    /// Seconds
    pub duration: f64,
}

pub trait RoutingGateway {
    fn driving_route(&self, from: MapPoint, to: MapPoint) -> Fallible<Route>;
}
