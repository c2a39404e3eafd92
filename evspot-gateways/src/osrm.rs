use anyhow::Result as Fallible;
use evspot_core::{
    entities::MapPoint,
    gateways::routing::{Route, RoutingGateway},
};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Driving routes from an OSRM server.
#[derive(Debug, Clone)]
pub struct Osrm {
    base_url: String,
}

impl Osrm {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self { base_url }
    }

    fn route_url(&self, from: MapPoint, to: MapPoint) -> String {
        // OSRM expects longitude first
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url,
            from.lng(),
            from.lat(),
            to.lng(),
            to.lat()
        )
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    distance: f64,
    duration: f64,
}

#[derive(Debug, Error)]
enum RouteError {
    #[error("Routing failed with code {code}: {message}")]
    Code { code: String, message: String },
    #[error("No route found")]
    NoRoute,
}

fn route_from_response(res: RouteResponse) -> Result<Route, RouteError> {
    let RouteResponse {
        code,
        message,
        routes,
    } = res;
    if code != "Ok" {
        return Err(RouteError::Code {
            code,
            message: message.unwrap_or_default(),
        });
    }
    let RouteLeg { distance, duration } = routes.into_iter().next().ok_or(RouteError::NoRoute)?;
    Ok(Route { distance, duration })
}

impl RoutingGateway for Osrm {
    fn driving_route(&self, from: MapPoint, to: MapPoint) -> Fallible<Route> {
        let url = self.route_url(from, to);
        log::debug!("Requesting route: {url}");
        let client = reqwest::blocking::Client::new();
        let res: RouteResponse = client.get(&url).send()?.json()?;
        let route = route_from_response(res).inspect_err(|err| {
            log::warn!("Unable to find route from {from} to {to}: {err}");
        })?;
        Ok(route)
    }
}
