//! # evspot-boundary
//!
//! Serializable, anemic data structures of the evspot JSON API.
//!
//! Field names are camelCase. Requests are lenient: numbers may be
//! sent as numeric strings, text fields as numbers and blank text
//! counts as absent.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
mod de;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message} ({http_status})"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// A human-readable error message.
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ChargerKind {
    Standard,
    Batteri,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

// ---   users & authentication   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub last_name: Option<String>,
    #[serde(default, alias = "phone", deserialize_with = "de::opt_text")]
    pub phone_number: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    #[serde(alias = "token")]
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
}

/// Public profile of a user.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub last_name: Option<String>,
    #[serde(default, alias = "phone", deserialize_with = "de::opt_text")]
    pub phone_number: Option<String>,
}

// ---   charging stations   --- //

/// Likes and dislikes of a station or a comment.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Reactions {
    pub likes: usize,
    pub dislikes: usize,
    pub liked_by: Vec<String>,
    pub disliked_by: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ReactionRequest {
    pub reaction: Reaction,
}

/// Request body for creating and for updating a station.
///
/// On update only the present fields are applied.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewStation {
    #[serde(default)]
    pub kind          : Option<ChargerKind>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub location      : Option<String>,
    #[serde(default, alias = "lat", deserialize_with = "de::opt_number")]
    pub latitude      : Option<f64>,
    #[serde(default, alias = "lng", deserialize_with = "de::opt_number")]
    pub longitude     : Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number")]
    pub price         : Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number")]
    pub rating        : Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number")]
    pub charging_rate : Option<f64>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub picture       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub description   : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id            : String,
    pub kind          : ChargerKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location      : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude      : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude     : Option<f64>,
    pub price         : f64,
    pub rating        : f64,
    pub charging_rate : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner         : Option<String>,
    #[serde(flatten)]
    pub reactions     : Reactions,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct StationWithComments {
    #[serde(flatten)]
    pub station: Station,
    pub comments: Vec<Comment>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Route {
    /// Meters
    pub distance: f64,
    /// Seconds
    pub duration: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct ChargingTimeEstimate {
    /// The car the estimate is based on.
    pub car: Option<CarProfile>,
    pub hours: Option<f64>,
}

// ---   comments   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewComment {
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "Rating", deserialize_with = "de::opt_integer")]
    pub rating: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub station_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
    #[serde(flatten)]
    pub reactions: Reactions,
}

// ---   bookings   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(default, alias = "stationId", deserialize_with = "de::opt_text")]
    pub charger_id                  : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub date                        : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub start_time                  : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub end_time                    : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub message                     : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub contact_number              : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub date_leave                  : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub time_leave                  : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub current_battery_level       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub desired_battery_level       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub park_location_spot_id       : Option<String>,
    #[serde(default, deserialize_with = "de::flag")]
    pub send_sms_on_complete        : bool,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub site_picker                 : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub vehicle_model               : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub vehicle_license_plate       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub vehicle_year                : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub vehicle_color               : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub vehicle_driver_full_name    : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub dial_code                   : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub vehicle_driver_phone_number : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub park_location_floor         : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub note                        : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    #[serde(default, deserialize_with = "de::opt_text")]
    pub date           : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub start_time     : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub end_time       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub message        : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub contact_number : Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub status         : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id                          : String,
    pub kind                        : ChargerKind,
    pub charger_id                  : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_by                   : Option<String>,
    /// Unix timestamp in milliseconds
    pub created_at                  : i64,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date                        : Option<String>,
    /// Unix timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time                  : Option<i64>,
    /// Unix timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time                    : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message                     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number              : Option<String>,
    pub status                      : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_leave                  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_leave                  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_battery_level       : Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_battery_level       : Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_location_spot_id       : Option<String>,
    pub send_sms_on_complete        : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_picker                 : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model               : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_license_plate       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_year                : Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_color               : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_driver_full_name    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial_code                   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_driver_phone_number : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_location_floor         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note                        : Option<String>,
}

// ---   car profiles   --- //

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewCar {
    #[serde(default, alias = "carBrand", deserialize_with = "de::opt_text")]
    pub brand: Option<String>,
    #[serde(default, alias = "carModel", deserialize_with = "de::opt_text")]
    pub model: Option<String>,
    #[serde(default, alias = "carYear", deserialize_with = "de::opt_text")]
    pub year: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct CarProfile {
    pub id: String,
    pub owner: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_capacity_kwh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}
