// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use evspot_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod booking;
mod car_profile;
mod comment;
mod station;
mod user;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_station_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::station::dsl;
    schema::station::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_comment_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::station_comment::dsl;
    schema::station_comment::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_charger_kind(kind: i16) -> Result<ChargerKind> {
    ChargerKind::from_i16(kind).ok_or_else(|| anyhow!("Invalid charger kind: {kind}").into())
}

fn store_charger_kind(kind: ChargerKind) -> i16 {
    kind.to_i16().unwrap_or_default()
}

fn store_reaction(reaction: Reaction) -> i16 {
    reaction.to_i16().unwrap_or_default()
}

/// Collect reactions stored as `(user_id, reaction)` in insertion order.
fn load_reactions(rows: Vec<(String, i16)>) -> Reactions {
    let mut reactions = Reactions::default();
    for (user_id, value) in rows {
        match Reaction::from_i16(value) {
            Some(Reaction::Like) => reactions.liked_by.push(user_id.into()),
            Some(Reaction::Dislike) => reactions.disliked_by.push(user_id.into()),
            None => {
                // This should never happen
                log::warn!("Ignoring invalid reaction value {value} of user {user_id}");
            }
        }
    }
    reactions
}

fn reaction_rows(reactions: &Reactions) -> impl Iterator<Item = (&Id, i16)> {
    let likes = reactions
        .liked_by
        .iter()
        .map(|id| (id, store_reaction(Reaction::Like)));
    let dislikes = reactions
        .disliked_by
        .iter()
        .map(|id| (id, store_reaction(Reaction::Dislike)));
    likes.chain(dislikes)
}
