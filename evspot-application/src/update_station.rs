use super::*;
use evspot_core::{gateways::geocode::GeoCodingGateway, repositories::StationRepo};

pub fn update_station<G>(
    connections: &sqlite::Connections,
    geo: Option<&G>,
    logged_in: &Id,
    id: &Id,
    update: usecases::UpdateStation,
) -> Result<ChargingStation>
where
    G: GeoCodingGateway + ?Sized,
{
    let station = connections.shared()?.get_station(id)?;
    // Geocoding requests must not hold any lock
    let station_update = usecases::prepare_station_update(&station, geo, logged_in, update)?;
    let station = connections
        .exclusive()?
        .transaction(|conn| usecases::store_station_update(conn, logged_in, station_update))?;
    Ok(station)
}

pub fn set_station_picture(
    connections: &sqlite::Connections,
    logged_in: &Id,
    id: &Id,
    picture: String,
) -> Result<ChargingStation> {
    let station = connections
        .exclusive()?
        .transaction(|conn| usecases::set_station_picture(conn, logged_in, id, picture))?;
    Ok(station)
}

pub fn delete_station(connections: &sqlite::Connections, logged_in: &Id, id: &Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_station(conn, logged_in, id))?;
    info!("Deleted station {id}");
    Ok(())
}
