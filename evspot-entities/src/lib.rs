#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # evspot-entities
//!
//! Reusable, agnostic domain entities for evspot.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod booking;
pub mod car;
pub mod comment;
pub mod email;
pub mod geo;
pub mod id;
pub mod password;
pub mod reaction;
pub mod station;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
