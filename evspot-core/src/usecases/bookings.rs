use super::{
    book_charger::{booking_period, parse_booking_date},
    prelude::*,
};
use crate::{repositories::Error as RepoError, util::validate::non_blank};

pub fn get_booking<R: BookingRepo>(repo: &R, id: &Id) -> Result<Booking> {
    Ok(repo.get_booking(id)?)
}

pub fn all_bookings<R: BookingRepo>(repo: &R, kind: Option<ChargerKind>) -> Result<Vec<Booking>> {
    Ok(repo.all_bookings(kind)?)
}

fn of_kind(bookings: Vec<Booking>, kind: Option<ChargerKind>) -> Vec<Booking> {
    match kind {
        Some(kind) => bookings.into_iter().filter(|b| b.kind == kind).collect(),
        None => bookings,
    }
}

pub fn bookings_of_station<R: BookingRepo>(
    repo: &R,
    station_id: &Id,
    kind: Option<ChargerKind>,
) -> Result<Vec<Booking>> {
    Ok(of_kind(repo.bookings_of_station(station_id)?, kind))
}

pub fn bookings_of_user<R: BookingRepo>(
    repo: &R,
    user_id: &Id,
    kind: Option<ChargerKind>,
) -> Result<Vec<Booking>> {
    Ok(of_kind(repo.bookings_of_user(user_id)?, kind))
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateBooking {
    pub date           : Option<String>,
    pub start_time     : Option<String>,
    pub end_time       : Option<String>,
    pub message        : Option<String>,
    pub contact_number : Option<String>,
    pub status         : Option<String>,
}

/// Bookings may be changed by the booker and by the owner of the
/// booked station. A station that no longer exists has no owner.
fn check_booking_access<R>(repo: &R, logged_in: &Id, booking: &Booking) -> Result<()>
where
    R: StationRepo,
{
    if booking.is_booked_by(logged_in) {
        return Ok(());
    }
    match repo.get_station(&booking.station_id) {
        Ok(station) if station.is_owned_by(logged_in) => Ok(()),
        Ok(_) | Err(RepoError::NotFound) => Err(Error::Forbidden),
        Err(err) => Err(err.into()),
    }
}

pub fn update_booking<R>(
    repo: &R,
    logged_in: &Id,
    id: &Id,
    update: UpdateBooking,
) -> Result<Booking>
where
    R: StationRepo + BookingRepo,
{
    let mut booking = repo.get_booking(id)?;
    check_booking_access(repo, logged_in, &booking)?;
    let UpdateBooking {
        date,
        start_time,
        end_time,
        message,
        contact_number,
        status,
    } = update;
    if let Some(date) = non_blank(date) {
        let date = parse_booking_date(&date)?;
        let start_time = non_blank(start_time);
        let end_time = non_blank(end_time);
        let (start, end) =
            booking_period(Some(date), start_time.as_deref(), end_time.as_deref())?;
        let start = start.or(booking.start_time);
        let end = end.or(booking.end_time);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(Error::EndDateBeforeStart);
            }
        }
        booking.date = Some(date);
        booking.start_time = start;
        booking.end_time = end;
    }
    if let Some(message) = non_blank(message) {
        booking.message = Some(message);
    }
    if let Some(contact_number) = non_blank(contact_number) {
        booking.contact_number = Some(contact_number);
    }
    if let Some(status) = status.as_deref().and_then(BookingStatus::try_new) {
        booking.status = status;
    }
    log::debug!("Updating booking {id} (status = {})", booking.status);
    repo.update_booking(&booking)?;
    Ok(booking)
}

pub fn delete_booking<R>(repo: &R, logged_in: &Id, id: &Id) -> Result<()>
where
    R: StationRepo + BookingRepo,
{
    let booking = repo.get_booking(id)?;
    check_booking_access(repo, logged_in, &booking)?;
    repo.delete_booking(id)?;
    Ok(())
}
