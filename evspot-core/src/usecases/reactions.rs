use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Like or dislike a station.
///
/// Repeating the same reaction withdraws it.
pub fn toggle_station_reaction<R: StationRepo>(
    repo: &R,
    user_id: &Id,
    station_id: &Id,
    reaction: Reaction,
) -> Result<Reactions> {
    let mut station = repo.get_station(station_id)?;
    let current = station.reactions.toggle(user_id, reaction);
    log::debug!("Reaction of user {user_id} on station {station_id}: {current:?}");
    repo.update_station(&station)?;
    Ok(station.reactions)
}

pub fn toggle_comment_reaction<R: CommentRepo>(
    repo: &R,
    user_id: &Id,
    station_id: &Id,
    comment_id: &Id,
    reaction: Reaction,
) -> Result<Reactions> {
    let mut comment = repo.load_comment(comment_id)?;
    if comment.station_id != *station_id {
        return Err(RepoError::NotFound.into());
    }
    comment.reactions.toggle(user_id, reaction);
    repo.update_comment(&comment)?;
    Ok(comment.reactions)
}
