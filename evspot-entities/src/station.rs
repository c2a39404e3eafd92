use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};
use time::Duration;

use crate::{geo::MapPoint, id::Id, reaction::Reactions};

/// The two kinds of chargers that can be listed.
///
/// A `Batteri` charger is a portable unit that is brought to a parked
/// vehicle. Bookings for it require more details about the vehicle.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChargerKind {
    #[default]
    Standard = 0,
    Batteri  = 1,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingStation {
    pub id            : Id,
    pub kind          : ChargerKind,
    /// Free text address as entered by the owner.
    pub location      : Option<String>,
    pub pos           : Option<MapPoint>,
    pub price         : f64,
    /// Between 0.0 and 5.0.
    pub rating        : f64,
    /// Charging power in kW.
    pub charging_rate : f64,
    pub picture       : Option<String>,
    pub description   : Option<String>,
    pub owner         : Option<Id>,
    pub reactions     : Reactions,
}

impl ChargingStation {
    pub const MAX_RATING: f64 = 5.0;

    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        self.owner.as_ref() == Some(user_id)
    }

    /// Time needed to charge a battery with the given capacity (kWh)
    /// from empty to full at this station.
    pub fn charging_duration(&self, battery_capacity_kwh: f64) -> Option<Duration> {
        if !(self.charging_rate > 0.0) || !(battery_capacity_kwh > 0.0) {
            return None;
        }
        let seconds = battery_capacity_kwh / self.charging_rate * 3600.0;
        // Beyond this `Duration` overflows
        if !(seconds < i64::MAX as f64) {
            return None;
        }
        Some(Duration::seconds_f64(seconds))
    }
}
