use super::*;

pub fn add_comment(
    connections: &sqlite::Connections,
    author: &Id,
    station_id: &Id,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let comment = connections
        .exclusive()?
        .transaction(|conn| usecases::add_comment(conn, author, station_id, new_comment))?;
    Ok(comment)
}

pub fn update_comment(
    connections: &sqlite::Connections,
    logged_in: &Id,
    station_id: &Id,
    id: &Id,
    update: usecases::NewComment,
) -> Result<Comment> {
    let comment = connections.exclusive()?.transaction(|conn| {
        usecases::update_comment(conn, logged_in, station_id, id, update)
    })?;
    Ok(comment)
}

pub fn delete_comment(
    connections: &sqlite::Connections,
    logged_in: &Id,
    station_id: &Id,
    id: &Id,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_comment(conn, logged_in, station_id, id))?;
    Ok(())
}
