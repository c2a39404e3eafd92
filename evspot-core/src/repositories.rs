// Low-level database access traits.
// Each repository is responsible for a single entity and
// its dependent records. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    /// Replaces all fields including the list of refresh tokens.
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn count_users(&self) -> Result<usize>;
}

pub trait StationRepo {
    fn create_station(&self, station: &ChargingStation) -> Result<()>;
    /// Replaces all fields including the reactions.
    fn update_station(&self, station: &ChargingStation) -> Result<()>;
    /// Deletes the station together with its comments.
    fn delete_station(&self, id: &Id) -> Result<()>;

    fn get_station(&self, id: &Id) -> Result<ChargingStation>;
    fn all_stations(&self, kind: Option<ChargerKind>) -> Result<Vec<ChargingStation>>;
    fn stations_of_owner(&self, owner: &Id) -> Result<Vec<ChargingStation>>;

    fn count_stations(&self) -> Result<usize>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
    fn delete_comment(&self, id: &Id) -> Result<()>;

    fn load_comment(&self, id: &Id) -> Result<Comment>;
    /// Oldest first
    fn load_comments_of_station(&self, station_id: &Id) -> Result<Vec<Comment>>;

    fn zip_stations_with_comments(
        &self,
        stations: Vec<ChargingStation>,
    ) -> Result<Vec<(ChargingStation, Vec<Comment>)>> {
        let mut results = Vec::with_capacity(stations.len());
        for station in stations {
            let comments = self.load_comments_of_station(&station.id)?;
            results.push((station, comments));
        }
        Ok(results)
    }
}

pub trait BookingRepo {
    fn create_booking(&self, booking: &Booking) -> Result<()>;
    fn update_booking(&self, booking: &Booking) -> Result<()>;
    fn delete_booking(&self, id: &Id) -> Result<()>;

    fn get_booking(&self, id: &Id) -> Result<Booking>;
    fn all_bookings(&self, kind: Option<ChargerKind>) -> Result<Vec<Booking>>;
    fn bookings_of_station(&self, station_id: &Id) -> Result<Vec<Booking>>;
    fn bookings_of_user(&self, user_id: &Id) -> Result<Vec<Booking>>;
}

pub trait CarProfileRepo {
    fn create_car_profile(&self, profile: &CarProfile) -> Result<()>;
    fn delete_car_profiles_of_owner(&self, owner: &Id) -> Result<usize>;
    /// Newest first
    fn car_profiles_of_owner(&self, owner: &Id) -> Result<Vec<CarProfile>>;
}
