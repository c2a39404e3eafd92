use super::*;
use evspot_entities as e;

impl From<e::station::ChargerKind> for ChargerKind {
    fn from(from: e::station::ChargerKind) -> Self {
        use e::station::ChargerKind::*;
        match from {
            Standard => ChargerKind::Standard,
            Batteri => ChargerKind::Batteri,
        }
    }
}

impl From<ChargerKind> for e::station::ChargerKind {
    fn from(from: ChargerKind) -> Self {
        use e::station::ChargerKind::*;
        match from {
            ChargerKind::Standard => Standard,
            ChargerKind::Batteri => Batteri,
        }
    }
}

impl From<Reaction> for e::reaction::Reaction {
    fn from(from: Reaction) -> Self {
        use e::reaction::Reaction::*;
        match from {
            Reaction::Like => Like,
            Reaction::Dislike => Dislike,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            first_name,
            last_name,
            email,
            password: _,
            phone_number,
            picture,
            refresh_tokens: _,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            first_name,
            last_name,
            phone_number,
            picture,
        }
    }
}

impl From<e::reaction::Reactions> for Reactions {
    fn from(from: e::reaction::Reactions) -> Self {
        let likes = from.likes();
        let dislikes = from.dislikes();
        let e::reaction::Reactions {
            liked_by,
            disliked_by,
        } = from;
        Self {
            likes,
            dislikes,
            liked_by: liked_by.into_iter().map(Into::into).collect(),
            disliked_by: disliked_by.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::station::ChargingStation> for Station {
    fn from(from: e::station::ChargingStation) -> Self {
        let e::station::ChargingStation {
            id,
            kind,
            location,
            pos,
            price,
            rating,
            charging_rate,
            picture,
            description,
            owner,
            reactions,
        } = from;
        Self {
            id: id.into(),
            kind: kind.into(),
            location,
            latitude: pos.map(|p| p.lat()),
            longitude: pos.map(|p| p.lng()),
            price,
            rating,
            charging_rate,
            picture,
            description,
            owner: owner.map(Into::into),
            reactions: reactions.into(),
        }
    }
}

impl From<(e::station::ChargingStation, Vec<e::comment::Comment>)> for StationWithComments {
    fn from((station, comments): (e::station::ChargingStation, Vec<e::comment::Comment>)) -> Self {
        Self {
            station: station.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            station_id,
            author,
            text,
            rating,
            created_at,
            reactions,
        } = from;
        Self {
            id: id.into(),
            station_id: station_id.into(),
            author: author.map(Into::into),
            text,
            rating: rating.map(|r| r.value()),
            created_at: created_at.as_millis(),
            reactions: reactions.into(),
        }
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
            id,
            kind,
            station_id,
            booked_by,
            created_at,
            date,
            start_time,
            end_time,
            message,
            contact_number,
            status,
            vehicle,
        } = from;
        let e::booking::VehicleDetails {
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
        } = vehicle;
        Self {
            id: id.into(),
            kind: kind.into(),
            charger_id: station_id.into(),
            booked_by: booked_by.map(Into::into),
            created_at: created_at.as_millis(),
            date: date.map(e::time::format_date),
            start_time: start_time.map(e::time::Timestamp::as_millis),
            end_time: end_time.map(e::time::Timestamp::as_millis),
            message,
            contact_number,
            status: status.to_string(),
            date_leave: date_leave.map(e::time::format_date),
            time_leave,
            current_battery_level: current_battery_level.map(e::booking::BatteryLevel::percent),
            desired_battery_level: desired_battery_level.map(e::booking::BatteryLevel::percent),
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
}

impl From<e::car::CarProfile> for CarProfile {
    fn from(from: e::car::CarProfile) -> Self {
        let e::car::CarProfile {
            id,
            owner,
            brand,
            model,
            year,
            battery_capacity_kwh,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            owner: owner.into(),
            brand,
            model,
            year,
            battery_capacity_kwh,
            description,
            created_at: created_at.as_millis(),
        }
    }
}
