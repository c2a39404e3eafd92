use crate::{repositories, util::validate::StationInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid email address")]
    Email,
    #[error("Invalid phone number")]
    Phone,
    #[error("Invalid dial code")]
    DialCode,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Token expired")]
    TokenExpired,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid price")]
    Price,
    #[error("Invalid charging rate")]
    ChargingRate,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Empty comment")]
    EmptyComment,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid date format")]
    InvalidDate,
    #[error("Invalid time format")]
    InvalidTime,
    #[error("Invalid dateLeave format")]
    InvalidDateLeave,
    #[error("Battery levels must be numbers")]
    BatteryLevelNotANumber,
    #[error("Battery levels must be between 0 and 100")]
    BatteryLevel,
    #[error("Invalid vehicle year")]
    VehicleYear,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("The station does not offer this kind of charger")]
    ChargerKindMismatch,
    #[error("The route could not be calculated")]
    RouteUnavailable,
    #[error("Content generation failed: {0}")]
    ContentGeneration(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<evspot_entities::password::ParseError> for Error {
    fn from(_: evspot_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<evspot_entities::email::EmailAddressParseError> for Error {
    fn from(_: evspot_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<StationInvalidation> for Error {
    fn from(err: StationInvalidation) -> Self {
        match err {
            StationInvalidation::Price => Self::Price,
            StationInvalidation::Rating => Self::RatingValue,
            StationInvalidation::ChargingRate => Self::ChargingRate,
            StationInvalidation::Position => Self::InvalidPosition,
        }
    }
}
