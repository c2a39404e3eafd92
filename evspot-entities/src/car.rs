use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct CarProfile {
    pub id                   : Id,
    pub owner                : Id,
    pub brand                : String,
    pub model                : String,
    pub year                 : u16,
    pub battery_capacity_kwh : Option<f64>,
    /// Generated description of the car.
    pub description          : Option<String>,
    pub created_at           : Timestamp,
}
