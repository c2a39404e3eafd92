use time::{Date, Time};

use super::prelude::*;
use crate::util::validate::{self, non_blank};

/// Booking request as submitted by a client.
///
/// Dates, times and numbers are kept as text and parsed here.
/// Blank values count as absent.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewBooking {
    pub station_id                  : Option<Id>,
    pub date                        : Option<String>,
    pub start_time                  : Option<String>,
    pub end_time                    : Option<String>,
    pub message                     : Option<String>,
    pub contact_number              : Option<String>,
    pub date_leave                  : Option<String>,
    pub time_leave                  : Option<String>,
    pub current_battery_level       : Option<String>,
    pub desired_battery_level       : Option<String>,
    pub park_location_spot_id       : Option<String>,
    pub send_sms_on_complete        : bool,
    pub site_picker                 : Option<String>,
    pub vehicle_model               : Option<String>,
    pub vehicle_license_plate       : Option<String>,
    pub vehicle_year                : Option<String>,
    pub vehicle_color               : Option<String>,
    pub vehicle_driver_full_name    : Option<String>,
    pub dial_code                   : Option<String>,
    pub vehicle_driver_phone_number : Option<String>,
    pub park_location_floor         : Option<String>,
    pub note                        : Option<String>,
}

pub(crate) fn parse_booking_date(date: &str) -> Result<Date> {
    parse_date(date).map_err(|_| Error::InvalidDate)
}

fn parse_booking_time(time: &str) -> Result<Time> {
    parse_time_of_day(time).map_err(|_| Error::InvalidTime)
}

/// Start and end are only considered together with a date.
pub(crate) fn booking_period(
    date: Option<Date>,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> Result<(Option<Timestamp>, Option<Timestamp>)> {
    let Some(date) = date else {
        return Ok((None, None));
    };
    let at = |time: Option<&str>| -> Result<Option<Timestamp>> {
        time.map(|t| parse_booking_time(t).map(|t| Timestamp::from_date_and_time(date, t)))
            .transpose()
    };
    let start = at(start_time)?;
    let end = at(end_time)?;
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(Error::EndDateBeforeStart);
        }
    }
    Ok((start, end))
}

fn parse_battery_level(level: Option<String>) -> Result<Option<BatteryLevel>> {
    let Some(level) = non_blank(level) else {
        return Ok(None);
    };
    let percent = level
        .parse::<f64>()
        .ok()
        .filter(|p| !p.is_nan())
        .ok_or(Error::BatteryLevelNotANumber)?;
    BatteryLevel::try_new(percent)
        .map(Some)
        .ok_or(Error::BatteryLevel)
}

fn parse_vehicle_year(year: Option<String>) -> Result<Option<u16>> {
    non_blank(year)
        .map(|y| y.parse::<u16>().map_err(|_| Error::VehicleYear))
        .transpose()
}

fn parse_vehicle_details(b: &mut NewBooking) -> Result<VehicleDetails> {
    let date_leave = non_blank(b.date_leave.take())
        .map(|d| parse_date(&d).map_err(|_| Error::InvalidDateLeave))
        .transpose()?;
    let time_leave = non_blank(b.time_leave.take());
    if let Some(time) = &time_leave {
        parse_booking_time(time)?;
    }
    let current_battery_level = parse_battery_level(b.current_battery_level.take())?;
    let desired_battery_level = parse_battery_level(b.desired_battery_level.take())?;
    let vehicle_year = parse_vehicle_year(b.vehicle_year.take())?;
    let dial_code = non_blank(b.dial_code.take());
    if dial_code
        .as_deref()
        .is_some_and(|c| !validate::is_valid_dial_code(c))
    {
        return Err(Error::DialCode);
    }
    let vehicle_driver_phone_number = non_blank(b.vehicle_driver_phone_number.take());
    if vehicle_driver_phone_number
        .as_deref()
        .is_some_and(|p| !validate::is_valid_phone_number(p))
    {
        return Err(Error::Phone);
    }
    Ok(VehicleDetails {
        date_leave,
        time_leave,
        current_battery_level,
        desired_battery_level,
        park_location_spot_id: non_blank(b.park_location_spot_id.take()),
        send_sms_on_complete: b.send_sms_on_complete,
        site_picker: non_blank(b.site_picker.take()),
        vehicle_model: non_blank(b.vehicle_model.take()),
        vehicle_license_plate: non_blank(b.vehicle_license_plate.take()),
        vehicle_year,
        vehicle_color: non_blank(b.vehicle_color.take()),
        vehicle_driver_full_name: non_blank(b.vehicle_driver_full_name.take()),
        dial_code,
        vehicle_driver_phone_number,
        park_location_floor: non_blank(b.park_location_floor.take()),
        note: non_blank(b.note.take()),
    })
}

/// A batteri charger is brought to the vehicle, so the operator
/// needs to know where it is parked and how it should be charged.
fn check_batteri_details(v: &VehicleDetails) -> Result<()> {
    let required = [
        ("dateLeave", v.date_leave.is_some()),
        ("timeLeave", v.time_leave.is_some()),
        ("currentBatteryLevel", v.current_battery_level.is_some()),
        ("desiredBatteryLevel", v.desired_battery_level.is_some()),
        ("sitePicker", v.site_picker.is_some()),
        ("vehicleModel", v.vehicle_model.is_some()),
        ("vehicleLicensePlate", v.vehicle_license_plate.is_some()),
        ("vehicleDriverFullName", v.vehicle_driver_full_name.is_some()),
        ("dialCode", v.dial_code.is_some()),
        (
            "vehicleDriverPhoneNumber",
            v.vehicle_driver_phone_number.is_some(),
        ),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, present)| !present) {
        return Err(Error::MissingField(field));
    }
    Ok(())
}

pub fn book_charger<R>(
    repo: &R,
    booked_by: &Id,
    kind: ChargerKind,
    mut b: NewBooking,
) -> Result<Booking>
where
    R: StationRepo + BookingRepo,
{
    let station_id = b
        .station_id
        .take()
        .filter(Id::is_valid)
        .ok_or(Error::MissingField("chargerId"))?;
    let date = non_blank(b.date.take())
        .map(|d| parse_booking_date(&d))
        .transpose()?;
    let start_time = non_blank(b.start_time.take());
    let end_time = non_blank(b.end_time.take());
    let (start_time, end_time) =
        booking_period(date, start_time.as_deref(), end_time.as_deref())?;
    let vehicle = parse_vehicle_details(&mut b)?;
    if kind == ChargerKind::Batteri {
        check_batteri_details(&vehicle)?;
    }

    let station = repo.get_station(&station_id)?;
    if station.kind != kind {
        log::debug!(
            "Cannot book a {kind} charger at station {station_id} of kind {}",
            station.kind
        );
        return Err(Error::ChargerKindMismatch);
    }

    let booking = Booking {
        id: Id::new(),
        kind,
        station_id,
        booked_by: Some(booked_by.clone()),
        created_at: Timestamp::now(),
        date,
        start_time,
        end_time,
        message: non_blank(b.message),
        contact_number: non_blank(b.contact_number),
        status: BookingStatus::default(),
        vehicle,
    };
    log::debug!("Booking {} charger at station {}", kind, booking.station_id);
    repo.create_booking(&booking)?;
    Ok(booking)
}
