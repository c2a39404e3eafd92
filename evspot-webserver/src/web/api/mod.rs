use std::{fmt::Display, result, str::FromStr};

use anyhow::anyhow;
use evspot_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{ContentType, Status},
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite, Cfg},
};
use evspot_application::prelude as flows;

mod bookings;
mod cars;
mod comments;
mod error;
mod stations;
mod upload;
mod users;
mod util;

pub use self::error::{Error as ApiError, ParameterError};


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        users::post_register,
        users::post_login,
        users::post_refresh,
        users::post_logout,
        // ---   users   --- //
        users::get_user,
        users::put_user,
        users::post_user_picture,
        stations::get_stations_of_user,
        bookings::get_bookings_of_user,
        cars::get_cars_of_user,
        // ---   stations   --- //
        stations::get_stations,
        stations::post_station,
        stations::get_station,
        stations::put_station,
        stations::delete_station,
        stations::post_station_picture,
        stations::get_station_owner,
        stations::post_station_reaction,
        stations::get_charging_time,
        stations::get_route,
        bookings::get_bookings_of_station,
        // ---   comments   --- //
        comments::post_comment,
        comments::put_comment,
        comments::delete_comment,
        comments::post_comment_reaction,
        // ---   bookings   --- //
        bookings::post_booking,
        bookings::get_bookings,
        bookings::get_booking,
        bookings::put_booking,
        bookings::delete_booking,
        // ---   cars   --- //
        cars::post_generate_car,
        // ---   server   --- //
        util::get_version,
        util::get_api,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Run a flow that waits for a third party service
/// without stalling the async runtime.
async fn blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow!("Blocking task failed: {err}")))?
}

fn charger_kind(kind: Option<&str>) -> result::Result<Option<ChargerKind>, ApiError> {
    kind.map(|kind| {
        ChargerKind::from_str(kind.trim()).map_err(|_| {
            ApiError::OtherWithStatus(anyhow!("Unknown charger kind '{kind}'"), Status::BadRequest)
        })
    })
    .transpose()
}
