use super::*;
use usecases::RefreshTokenRotation;

/// Verify the credentials and remember the refresh token
/// that has been issued for the user.
pub fn login<F>(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
    issue_refresh_token: F,
) -> Result<(User, String)>
where
    F: FnOnce(&User) -> anyhow::Result<String>,
{
    let user = usecases::login_with_email(&connections.shared()?, credentials)?;
    let refresh_token = issue_refresh_token(&user)?;
    connections.exclusive()?.transaction(|conn| {
        usecases::store_refresh_token(conn, &user.id, refresh_token.clone())
    })?;
    debug!("User {} logged in", user.id);
    Ok((user, refresh_token))
}

/// Replace a presented refresh token with its successor.
///
/// Presenting a token that has already been replaced revokes
/// all refresh tokens of the user.
pub fn refresh(
    connections: &sqlite::Connections,
    user_id: &Id,
    presented: &str,
    replacement: String,
) -> Result<()> {
    let rotation = connections.exclusive()?.transaction(|conn| {
        usecases::rotate_refresh_token(conn, user_id, presented, replacement)
    })?;
    match rotation {
        RefreshTokenRotation::Rotated => Ok(()),
        RefreshTokenRotation::ReuseDetected => {
            warn!("Revoked all refresh tokens of user {user_id}");
            Err(usecases::Error::TokenInvalid.into())
        }
    }
}

pub fn logout(connections: &sqlite::Connections, user_id: &Id, token: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::revoke_refresh_token(conn, user_id, token))?;
    Ok(())
}
