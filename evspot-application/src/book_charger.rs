use super::*;

pub fn book_charger(
    connections: &sqlite::Connections,
    booked_by: &Id,
    kind: ChargerKind,
    new_booking: usecases::NewBooking,
) -> Result<Booking> {
    let booking = connections
        .exclusive()?
        .transaction(|conn| usecases::book_charger(conn, booked_by, kind, new_booking))?;
    info!(
        "User {booked_by} booked {kind} charger at station {}",
        booking.station_id
    );
    Ok(booking)
}

pub fn update_booking(
    connections: &sqlite::Connections,
    logged_in: &Id,
    id: &Id,
    update: usecases::UpdateBooking,
) -> Result<Booking> {
    let booking = connections
        .exclusive()?
        .transaction(|conn| usecases::update_booking(conn, logged_in, id, update))?;
    Ok(booking)
}

pub fn delete_booking(connections: &sqlite::Connections, logged_in: &Id, id: &Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_booking(conn, logged_in, id))?;
    Ok(())
}
