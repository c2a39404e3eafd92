#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub picture: Option<&'a str>,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub picture: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = user_refresh_token)]
pub struct NewUserRefreshToken<'a> {
    pub user_rowid: i64,
    pub token: &'a str,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = station, treat_none_as_null = true)]
pub struct NewStation<'a> {
    pub id: &'a str,
    pub kind: i16,
    pub location: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub price: f64,
    pub rating: f64,
    pub charging_rate: f64,
    pub picture: Option<&'a str>,
    pub description: Option<&'a str>,
    pub owner: Option<&'a str>,
}

#[derive(Queryable)]
pub struct StationEntity {
    pub rowid: i64,
    pub id: String,
    pub kind: i16,
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub price: f64,
    pub rating: f64,
    pub charging_rate: f64,
    pub picture: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = station_reaction)]
pub struct NewStationReaction<'a> {
    pub station_rowid: i64,
    pub user_id: &'a str,
    pub reaction: i16,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = station_comment, treat_none_as_null = true)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub station_rowid: i64,
    pub author: Option<&'a str>,
    pub text: &'a str,
    pub rating: Option<i16>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub rowid: i64,
    pub id: String,
    pub station_rowid: i64,
    pub author: Option<String>,
    pub text: String,
    pub rating: Option<i16>,
    pub created_at: i64,
    // Joined columns
    pub station_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = comment_reaction)]
pub struct NewCommentReaction<'a> {
    pub comment_rowid: i64,
    pub user_id: &'a str,
    pub reaction: i16,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = booking, treat_none_as_null = true)]
pub struct NewBooking<'a> {
    pub id: &'a str,
    pub kind: i16,
    pub station_id: &'a str,
    pub booked_by: Option<&'a str>,
    pub created_at: i64,
    pub date: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub message: Option<&'a str>,
    pub contact_number: Option<&'a str>,
    pub status: &'a str,
    pub date_leave: Option<String>,
    pub time_leave: Option<&'a str>,
    pub current_battery_level: Option<i16>,
    pub desired_battery_level: Option<i16>,
    pub park_location_spot_id: Option<&'a str>,
    pub send_sms_on_complete: bool,
    pub site_picker: Option<&'a str>,
    pub vehicle_model: Option<&'a str>,
    pub vehicle_license_plate: Option<&'a str>,
    pub vehicle_year: Option<i32>,
    pub vehicle_color: Option<&'a str>,
    pub vehicle_driver_full_name: Option<&'a str>,
    pub dial_code: Option<&'a str>,
    pub vehicle_driver_phone_number: Option<&'a str>,
    pub park_location_floor: Option<&'a str>,
    pub note: Option<&'a str>,
}

#[derive(Queryable)]
pub struct BookingEntity {
    pub rowid: i64,
    pub id: String,
    pub kind: i16,
    pub station_id: String,
    pub booked_by: Option<String>,
    pub created_at: i64,
    pub date: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub message: Option<String>,
    pub contact_number: Option<String>,
    pub status: String,
    pub date_leave: Option<String>,
    pub time_leave: Option<String>,
    pub current_battery_level: Option<i16>,
    pub desired_battery_level: Option<i16>,
    pub park_location_spot_id: Option<String>,
    pub send_sms_on_complete: bool,
    pub site_picker: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_license_plate: Option<String>,
    pub vehicle_year: Option<i32>,
    pub vehicle_color: Option<String>,
    pub vehicle_driver_full_name: Option<String>,
    pub dial_code: Option<String>,
    pub vehicle_driver_phone_number: Option<String>,
    pub park_location_floor: Option<String>,
    pub note: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = car_profile)]
pub struct NewCarProfile<'a> {
    pub id: &'a str,
    pub owner: &'a str,
    pub brand: &'a str,
    pub model: &'a str,
    pub year: i32,
    pub battery_capacity_kwh: Option<f64>,
    pub description: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CarProfileEntity {
    pub rowid: i64,
    pub id: String,
    pub owner: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub battery_capacity_kwh: Option<f64>,
    pub description: Option<String>,
    pub created_at: i64,
}
