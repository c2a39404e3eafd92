use super::prelude::*;
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub text: String,
    pub rating: Option<i64>,
}

fn prepare_comment(c: NewComment) -> Result<(String, Option<CommentRating>)> {
    let text = c.text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let rating = c
        .rating
        .map(|r| CommentRating::try_new(r).ok_or(Error::RatingValue))
        .transpose()?;
    Ok((text.to_owned(), rating))
}

fn load_comment_of_station<R: CommentRepo>(repo: &R, station_id: &Id, id: &Id) -> Result<Comment> {
    let comment = repo.load_comment(id)?;
    if comment.station_id != *station_id {
        return Err(RepoError::NotFound.into());
    }
    Ok(comment)
}

/// Recalculate the rating of a station from its comments.
///
/// A station without any rated comment keeps its rating.
pub fn refresh_station_rating<R>(repo: &R, station_id: &Id) -> Result<()>
where
    R: StationRepo + CommentRepo,
{
    let mut station = repo.get_station(station_id)?;
    let comments = repo.load_comments_of_station(station_id)?;
    if let Some(avg) = avg_comment_rating(&comments) {
        if avg != station.rating {
            log::debug!("New rating of station {station_id}: {avg}");
            station.rating = avg;
            repo.update_station(&station)?;
        }
    }
    Ok(())
}

pub fn add_comment<R>(
    repo: &R,
    author: &Id,
    station_id: &Id,
    c: NewComment,
) -> Result<Comment>
where
    R: StationRepo + CommentRepo,
{
    let (text, rating) = prepare_comment(c)?;
    // The station must exist
    repo.get_station(station_id)?;
    let comment = Comment {
        id: Id::new(),
        station_id: station_id.clone(),
        author: Some(author.clone()),
        text,
        rating,
        created_at: Timestamp::now(),
        reactions: Default::default(),
    };
    repo.create_comment(&comment)?;
    refresh_station_rating(repo, station_id)?;
    Ok(comment)
}

pub fn update_comment<R>(
    repo: &R,
    logged_in: &Id,
    station_id: &Id,
    id: &Id,
    c: NewComment,
) -> Result<Comment>
where
    R: StationRepo + CommentRepo,
{
    let mut comment = load_comment_of_station(repo, station_id, id)?;
    if !comment.is_written_by(logged_in) {
        return Err(Error::Forbidden);
    }
    let (text, rating) = prepare_comment(c)?;
    comment.text = text;
    comment.rating = rating;
    repo.update_comment(&comment)?;
    refresh_station_rating(repo, station_id)?;
    Ok(comment)
}

/// Comments may be deleted by their author or the owner of the station.
pub fn delete_comment<R>(repo: &R, logged_in: &Id, station_id: &Id, id: &Id) -> Result<()>
where
    R: StationRepo + CommentRepo,
{
    let comment = load_comment_of_station(repo, station_id, id)?;
    let station = repo.get_station(station_id)?;
    if !comment.is_written_by(logged_in) && !station.is_owned_by(logged_in) {
        return Err(Error::Forbidden);
    }
    repo.delete_comment(id)?;
    refresh_station_rating(repo, station_id)?;
    Ok(())
}
