use super::*;

fn bookings_to_json(bookings: Vec<Booking>) -> Vec<json::Booking> {
    bookings.into_iter().map(Into::into).collect()
}

/// Returns the id of the new booking.
#[post("/bookings?<kind>", format = "application/json", data = "<booking>")]
pub fn post_booking(
    db: sqlite::Connections,
    auth: Auth,
    kind: Option<&str>,
    booking: JsonResult<json::NewBooking>,
) -> Result<String> {
    let booked_by = auth.user_id()?;
    let kind = charger_kind(kind)?.unwrap_or_default();
    let new_booking = from_json::new_booking(booking?.into_inner());
    let booking = flows::book_charger(&db, booked_by, kind, new_booking)?;
    Ok(Json(booking.id.to_string()))
}

#[get("/bookings?<kind>")]
pub fn get_bookings(
    db: sqlite::Connections,
    auth: Auth,
    kind: Option<&str>,
) -> Result<Vec<json::Booking>> {
    auth.user_id()?;
    let bookings = usecases::all_bookings(&db.shared()?, charger_kind(kind)?)?;
    Ok(Json(bookings_to_json(bookings)))
}

#[get("/bookings/<id>")]
pub fn get_booking(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::Booking> {
    auth.user_id()?;
    let booking = usecases::get_booking(&db.shared()?, &id.into())?;
    Ok(Json(booking.into()))
}

#[get("/stations/<id>/bookings?<kind>")]
pub fn get_bookings_of_station(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    kind: Option<&str>,
) -> Result<Vec<json::Booking>> {
    auth.user_id()?;
    let bookings =
        usecases::bookings_of_station(&db.shared()?, &id.into(), charger_kind(kind)?)?;
    Ok(Json(bookings_to_json(bookings)))
}

#[get("/users/<id>/bookings?<kind>")]
pub fn get_bookings_of_user(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    kind: Option<&str>,
) -> Result<Vec<json::Booking>> {
    auth.user_id()?;
    let bookings = usecases::bookings_of_user(&db.shared()?, &id.into(), charger_kind(kind)?)?;
    Ok(Json(bookings_to_json(bookings)))
}

#[put("/bookings/<id>", format = "application/json", data = "<update>")]
pub fn put_booking(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::UpdateBooking>,
) -> Result<json::Booking> {
    let update = from_json::update_booking(update?.into_inner());
    let booking = flows::update_booking(&db, auth.user_id()?, &id.into(), update)?;
    Ok(Json(booking.into()))
}

#[delete("/bookings/<id>")]
pub fn delete_booking(db: sqlite::Connections, auth: Auth, id: &str) -> Result<()> {
    flows::delete_booking(&db, auth.user_id()?, &id.into())?;
    Ok(Json(()))
}
