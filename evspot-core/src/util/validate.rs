use evspot_entities::{geo::MapBbox, station::ChargingStation};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

lazy_static! {
    static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\+?\(?[0-9][0-9 ()/.-]{2,24}$").unwrap();
    static ref DIAL_CODE_REGEX: Regex = Regex::new(r"^\+?[0-9]{1,4}$").unwrap();
}

pub fn is_valid_bbox(bbox: &MapBbox) -> bool {
    bbox.is_valid() && !bbox.is_empty()
}

pub fn is_valid_phone_number(s: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(s)
}

pub fn is_valid_dial_code(s: &str) -> bool {
    DIAL_CODE_REGEX.is_match(s)
}

/// Trim the text and drop it if nothing remains.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_owned())
        }
    })
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StationInvalidation {
    #[error("Invalid price")]
    Price,
    #[error("Invalid rating")]
    Rating,
    #[error("Invalid charging rate")]
    ChargingRate,
    #[error("Invalid position")]
    Position,
}

impl Validate for ChargingStation {
    type Error = StationInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(Self::Error::Price);
        }
        if !(0.0..=ChargingStation::MAX_RATING).contains(&self.rating) {
            return Err(Self::Error::Rating);
        }
        if !(self.charging_rate.is_finite() && self.charging_rate >= 0.0) {
            return Err(Self::Error::ChargingRate);
        }
        if self.pos.is_some_and(|pos| !pos.is_valid()) {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}

impl AutoCorrect for ChargingStation {
    fn auto_correct(mut self) -> Self {
        self.location = non_blank(self.location);
        self.description = non_blank(self.description);
        self.picture = non_blank(self.picture);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evspot_entities::builders::*;

    #[test]
    fn phone_numbers() {
        assert!(is_valid_phone_number("+47 912 34 567"));
        assert!(is_valid_phone_number("0176/1234567"));
        assert!(is_valid_phone_number("(030) 123-456"));
        assert!(!is_valid_phone_number("call me"));
        assert!(!is_valid_phone_number("12"));
    }

    #[test]
    fn dial_codes() {
        assert!(is_valid_dial_code("+47"));
        assert!(is_valid_dial_code("49"));
        assert!(!is_valid_dial_code("+12345"));
        assert!(!is_valid_dial_code("+4a"));
    }

    #[test]
    fn trim_blank_text() {
        assert_eq!(None, non_blank(None));
        assert_eq!(None, non_blank(Some("  \t".into())));
        assert_eq!(Some("a b".to_string()), non_blank(Some(" a b ".into())));
    }

    #[test]
    fn validate_station() {
        let station = ChargingStation::build().price(2.5).rating(4.0).finish();
        assert!(station.validate().is_ok());
        let station = ChargingStation::build().price(-1.0).finish();
        assert_eq!(Err(StationInvalidation::Price), station.validate());
        let station = ChargingStation::build().rating(5.5).finish();
        assert_eq!(Err(StationInvalidation::Rating), station.validate());
        let station = ChargingStation::build().charging_rate(f64::NAN).finish();
        assert_eq!(Err(StationInvalidation::ChargingRate), station.validate());
    }

    #[test]
    fn auto_correct_station() {
        let station = ChargingStation::build()
            .location("  Storgata 1, Oslo ")
            .finish()
            .auto_correct();
        assert_eq!(Some("Storgata 1, Oslo"), station.location.as_deref());
        assert_eq!(None, station.description);
    }
}
