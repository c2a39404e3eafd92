use super::*;

pub fn update_user(
    connections: &sqlite::Connections,
    logged_in: &Id,
    id: &Id,
    update: usecases::UpdateUser,
) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::update_user(conn, logged_in, id, update))?;
    Ok(user)
}

pub fn set_user_picture(
    connections: &sqlite::Connections,
    logged_in: &Id,
    id: &Id,
    picture: String,
) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::set_user_picture(conn, logged_in, id, picture))?;
    Ok(user)
}
