mod book_charger;
mod bookings;
mod car_profiles;
mod comments;
mod create_station;
mod error;
mod login;
mod query_stations;
mod reactions;
mod refresh_tokens;
mod register;
mod stations;
mod travel;
mod users;

#[cfg(test)]
pub mod tests;

pub use self::{
    book_charger::*, bookings::*, car_profiles::*, comments::*, create_station::*, error::Error,
    login::*, query_stations::*, reactions::*, refresh_tokens::*, register::*, stations::*,
    travel::*, users::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
