use time::Duration;

use super::prelude::*;
use crate::gateways::routing::{Route, RoutingGateway};

#[derive(Debug, Clone, PartialEq)]
pub struct ChargingTimeEstimate {
    pub car: CarProfile,
    /// `None` if the capacity of the battery or the charging
    /// rate of the station is unknown.
    pub duration: Option<Duration>,
}

/// Estimate how long a full charge of the user's car takes at a station.
///
/// The most recent car profile of the user is used. Users without a
/// car profile get no estimate.
pub fn estimate_charging_time<R>(
    repo: &R,
    user_id: &Id,
    station_id: &Id,
) -> Result<Option<ChargingTimeEstimate>>
where
    R: StationRepo + CarProfileRepo,
{
    let station = repo.get_station(station_id)?;
    let Some(car) = repo.car_profiles_of_owner(user_id)?.into_iter().next() else {
        log::debug!("User {user_id} has no car profile");
        return Ok(None);
    };
    let duration = car
        .battery_capacity_kwh
        .and_then(|capacity| station.charging_duration(capacity));
    Ok(Some(ChargingTimeEstimate { car, duration }))
}

pub fn route_to_station<R, G>(repo: &R, routing: &G, station_id: &Id, from: MapPoint) -> Result<Route>
where
    R: StationRepo,
    G: RoutingGateway + ?Sized,
{
    let station = repo.get_station(station_id)?;
    let to = station.pos.ok_or(Error::InvalidPosition)?;
    routing.driving_route(from, to).map_err(|err| {
        log::warn!("No route from {from} to station {station_id}: {err}");
        Error::RouteUnavailable
    })
}
