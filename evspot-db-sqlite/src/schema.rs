///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        email -> Text,
        password -> Text,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
        phone_number -> Nullable<Text>,
        picture -> Nullable<Text>,
    }
}

table! {
    user_refresh_token (rowid) {
        rowid -> BigInt,
        user_rowid -> BigInt,
        token -> Text,
    }
}

joinable!(user_refresh_token -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Stations
///////////////////////////////////////////////////////////////////////

table! {
    station (rowid) {
        rowid -> BigInt,
        id -> Text,
        kind -> SmallInt,
        location -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        price -> Double,
        rating -> Double,
        charging_rate -> Double,
        picture -> Nullable<Text>,
        description -> Nullable<Text>,
        owner -> Nullable<Text>,
    }
}

table! {
    station_reaction (rowid) {
        rowid -> BigInt,
        station_rowid -> BigInt,
        user_id -> Text,
        reaction -> SmallInt,
    }
}

joinable!(station_reaction -> station (station_rowid));

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    station_comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        station_rowid -> BigInt,
        author -> Nullable<Text>,
        text -> Text,
        rating -> Nullable<SmallInt>,
        created_at -> BigInt,
    }
}

joinable!(station_comment -> station (station_rowid));

table! {
    comment_reaction (rowid) {
        rowid -> BigInt,
        comment_rowid -> BigInt,
        user_id -> Text,
        reaction -> SmallInt,
    }
}

joinable!(comment_reaction -> station_comment (comment_rowid));

///////////////////////////////////////////////////////////////////////
// Bookings
///////////////////////////////////////////////////////////////////////

table! {
    booking (rowid) {
        rowid -> BigInt,
        id -> Text,
        kind -> SmallInt,
        station_id -> Text,
        booked_by -> Nullable<Text>,
        created_at -> BigInt,
        date -> Nullable<Text>,
        start_time -> Nullable<BigInt>,
        end_time -> Nullable<BigInt>,
        message -> Nullable<Text>,
        contact_number -> Nullable<Text>,
        status -> Text,
        date_leave -> Nullable<Text>,
        time_leave -> Nullable<Text>,
        current_battery_level -> Nullable<SmallInt>,
        desired_battery_level -> Nullable<SmallInt>,
        park_location_spot_id -> Nullable<Text>,
        send_sms_on_complete -> Bool,
        site_picker -> Nullable<Text>,
        vehicle_model -> Nullable<Text>,
        vehicle_license_plate -> Nullable<Text>,
        vehicle_year -> Nullable<Integer>,
        vehicle_color -> Nullable<Text>,
        vehicle_driver_full_name -> Nullable<Text>,
        dial_code -> Nullable<Text>,
        vehicle_driver_phone_number -> Nullable<Text>,
        park_location_floor -> Nullable<Text>,
        note -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Car profiles
///////////////////////////////////////////////////////////////////////

table! {
    car_profile (rowid) {
        rowid -> BigInt,
        id -> Text,
        owner -> Text,
        brand -> Text,
        model -> Text,
        year -> Integer,
        battery_capacity_kwh -> Nullable<Double>,
        description -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    booking,
    car_profile,
    comment_reaction,
    station,
    station_comment,
    station_reaction,
    users,
    user_refresh_token,
);
