//! Flows that combine use cases with transactions and gateways.

#[macro_use]
extern crate log;

mod book_charger;
mod car_profiles;
mod comments;
mod create_station;
mod reactions;
mod refresh_tokens;
mod register_user;
mod update_station;
mod update_user;

pub mod prelude {
    pub use super::{
        book_charger::*, car_profiles::*, comments::*, create_station::*, reactions::*,
        refresh_tokens::*, register_user::*, update_station::*, update_user::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use evspot_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use evspot_db_sqlite::Connections;
}
