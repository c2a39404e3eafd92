//! Business rules of evspot.
//!
//! Use cases only depend on the repository and gateway traits
//! defined here. Storage and third party services are plugged in
//! by the outer crates.

pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use evspot_entities::{
        booking::*, car::*, comment::*, email::*, geo::*, id::*, password::*, reaction::*,
        station::*, time::*, user::*,
    };
}
