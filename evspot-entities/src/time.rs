use std::fmt;

use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, Time,
};

/// A point in time (UTC) with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

#[derive(Debug, Error)]
#[error("Timestamp out of range")]
pub struct TimestampOutOfRange;

impl Timestamp {
    pub fn now() -> Self {
        Self::from_offset_date_time(OffsetDateTime::now_utc())
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub fn from_offset_date_time(dt: OffsetDateTime) -> Self {
        Self((dt.unix_timestamp_nanos() / 1_000_000) as i64)
    }

    /// Combine a calendar date and a wall clock time, both interpreted as UTC.
    pub fn from_date_and_time(date: Date, time: Time) -> Self {
        Self::from_offset_date_time(PrimitiveDateTime::new(date, time).assume_utc())
    }

    pub fn try_to_offset_date_time(self) -> Result<OffsetDateTime, TimestampOutOfRange> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .map_err(|_| TimestampOutOfRange)
    }
}

impl From<Timestamp> for i64 {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self
            .try_to_offset_date_time()
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
        {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid date (expected YYYY-MM-DD)")]
pub struct DateParseError;

#[derive(Debug, Error)]
#[error("Invalid time of day (expected HH:MM)")]
pub struct TimeOfDayParseError;

pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| DateParseError)
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

pub fn parse_time_of_day(s: &str) -> Result<Time, TimeOfDayParseError> {
    let s = s.trim();
    Time::parse(s, format_description!("[hour]:[minute]"))
        .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]:[second]")))
        .map_err(|_| TimeOfDayParseError)
}
