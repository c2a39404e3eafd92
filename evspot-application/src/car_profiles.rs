use super::*;
use evspot_core::gateways::content::CarContentGateway;

pub fn generate_car_profile<G>(
    connections: &sqlite::Connections,
    gateway: &G,
    owner: &Id,
    car: usecases::NewCar,
) -> Result<CarProfile>
where
    G: CarContentGateway + ?Sized,
{
    // Gateway requests must not hold the write lock
    let profile = usecases::prepare_car_profile(gateway, owner, car)?;
    connections
        .exclusive()?
        .transaction(|conn| usecases::store_car_profile(conn, &profile))?;
    info!(
        "Generated car profile {} {} for user {owner}",
        profile.brand, profile.model
    );
    Ok(profile)
}
