use std::fmt;

use time::Date;

use crate::{id::Id, station::ChargerKind, time::Timestamp};

/// Free text status of a booking.
///
/// There is no fixed set of states, the owner of a station may use
/// whatever wording fits. New bookings are `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStatus(String);

impl BookingStatus {
    pub const PENDING: &'static str = "Pending";

    /// Blank input is rejected.
    pub fn try_new(status: impl AsRef<str>) -> Option<Self> {
        let status = status.as_ref().trim();
        (!status.is_empty()).then(|| Self(status.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self(Self::PENDING.to_owned())
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of charge in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatteryLevel(u8);

impl BatteryLevel {
    pub const MAX: u8 = 100;

    pub fn try_new(percent: f64) -> Option<Self> {
        (percent.is_finite() && (0.0..=f64::from(Self::MAX)).contains(&percent))
            .then(|| Self(percent.round() as u8))
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDetails {
    pub date_leave                  : Option<Date>,
    /// Time of day as entered, e.g. `17:30`.
    pub time_leave                  : Option<String>,
    pub current_battery_level       : Option<BatteryLevel>,
    pub desired_battery_level       : Option<BatteryLevel>,
    pub park_location_spot_id       : Option<String>,
    pub send_sms_on_complete        : bool,
    pub site_picker                 : Option<String>,
    pub vehicle_model               : Option<String>,
    pub vehicle_license_plate       : Option<String>,
    pub vehicle_year                : Option<u16>,
    pub vehicle_color               : Option<String>,
    pub vehicle_driver_full_name    : Option<String>,
    pub dial_code                   : Option<String>,
    pub vehicle_driver_phone_number : Option<String>,
    pub park_location_floor         : Option<String>,
    pub note                        : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id             : Id,
    pub kind           : ChargerKind,
    pub station_id     : Id,
    pub booked_by      : Option<Id>,
    pub created_at     : Timestamp,
    pub date           : Option<Date>,
    pub start_time     : Option<Timestamp>,
    pub end_time       : Option<Timestamp>,
    pub message        : Option<String>,
    pub contact_number : Option<String>,
    pub status         : BookingStatus,
    pub vehicle        : VehicleDetails,
}

impl Booking {
    pub fn is_booked_by(&self, user_id: &Id) -> bool {
        self.booked_by.as_ref() == Some(user_id)
    }
}
