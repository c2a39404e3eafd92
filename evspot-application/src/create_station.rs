use super::*;
use evspot_core::gateways::geocode::GeoCodingGateway;

pub fn create_station<G>(
    connections: &sqlite::Connections,
    geo: Option<&G>,
    owner: &Id,
    new_station: usecases::NewStation,
) -> Result<ChargingStation>
where
    G: GeoCodingGateway + ?Sized,
{
    // Geocoding requests must not hold the write lock
    let station = usecases::prepare_new_station(geo, owner, new_station)?;
    connections
        .exclusive()?
        .transaction(|conn| usecases::store_new_station(conn, &station))?;
    info!("Created {} station {}", station.kind, station.id);
    Ok(station)
}
