pub use evspot_boundary::*;

use crate::core::{entities as e, gateways::routing, usecases};

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            email,
            password,
            first_name,
            last_name,
            phone_number,
        } = from;
        usecases::NewUser {
            email,
            password,
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn update_user(from: UpdateUser) -> usecases::UpdateUser {
        let UpdateUser {
            first_name,
            last_name,
            phone_number,
        } = from;
        usecases::UpdateUser {
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn new_station(from: NewStation) -> usecases::NewStation {
        let NewStation {
            kind,
            location,
            latitude,
            longitude,
            price,
            rating,
            charging_rate,
            picture,
            description,
        } = from;
        usecases::NewStation {
            kind: kind.map(Into::into).unwrap_or_default(),
            location,
            lat: latitude,
            lng: longitude,
            price,
            rating,
            charging_rate,
            picture,
            description,
        }
    }

    pub fn update_station(from: NewStation) -> usecases::UpdateStation {
        let NewStation {
            kind,
            location,
            latitude,
            longitude,
            price,
            rating,
            charging_rate,
            picture,
            description,
        } = from;
        usecases::UpdateStation {
            kind: kind.map(Into::into),
            location,
            lat: latitude,
            lng: longitude,
            price,
            rating,
            charging_rate,
            picture,
            description,
        }
    }

    pub fn new_comment(from: NewComment) -> usecases::NewComment {
        let NewComment { text, rating } = from;
        usecases::NewComment { text, rating }
    }

    pub fn new_booking(from: NewBooking) -> usecases::NewBooking {
        let NewBooking {
            charger_id,
            date,
            start_time,
            end_time,
            message,
            contact_number,
            date_leave,
            time_leave,
            current_battery_level,
            desired_battery_level,
            park_location_spot_id,
            send_sms_on_complete,
            site_picker,
            vehicle_model,
            vehicle_license_plate,
            vehicle_year,
            vehicle_color,
            vehicle_driver_full_name,
            dial_code,
            vehicle_driver_phone_number,
            park_location_floor,
            note,
        } = from;
        usecases::NewBooking {
            station_id: charger_id.map(|id| e::Id::from(id.trim())),
            date,
            start_time,
            end_time,
            message,
            contact_number,
            date_leave,
            time_leave,
            current_battery_level,
            desired_battery_level,
            park_location_spot_id,
            send_sms_on_complete,
            site_picker,
            vehicle_model,
            vehicle_license_plate,
            vehicle_year,
            vehicle_color,
            vehicle_driver_full_name,
            dial_code,
            vehicle_driver_phone_number,
            park_location_floor,
            note,
        }
    }

    pub fn update_booking(from: UpdateBooking) -> usecases::UpdateBooking {
        let UpdateBooking {
            date,
            start_time,
            end_time,
            message,
            contact_number,
            status,
        } = from;
        usecases::UpdateBooking {
            date,
            start_time,
            end_time,
            message,
            contact_number,
            status,
        }
    }

    pub fn new_car(from: NewCar) -> usecases::NewCar {
        let NewCar { brand, model, year } = from;
        usecases::NewCar { brand, model, year }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn route(from: routing::Route) -> Route {
        let routing::Route { distance, duration } = from;
        Route { distance, duration }
    }

    pub fn charging_time_estimate(from: Option<usecases::ChargingTimeEstimate>) -> ChargingTimeEstimate {
        let Some(usecases::ChargingTimeEstimate { car, duration }) = from else {
            return ChargingTimeEstimate {
                car: None,
                hours: None,
            };
        };
        ChargingTimeEstimate {
            car: Some(car.into()),
            hours: duration.map(|d| d.as_seconds_f64() / 3600.0),
        }
    }
}
