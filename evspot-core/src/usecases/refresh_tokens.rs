use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenRotation {
    Rotated,
    /// The presented token was not known. All tokens of the user
    /// have been revoked.
    ReuseDetected,
}

/// Add the token of a new session.
///
/// Every session keeps its token until it logs out or the token is
/// rotated. Tokens are never evicted, because a refresh with a token
/// that is missing from the list counts as reuse and ends all sessions.
pub fn store_refresh_token<R: UserRepo>(repo: &R, user_id: &Id, token: String) -> Result<()> {
    let mut user = repo.get_user(user_id)?;
    user.refresh_tokens.push(token);
    repo.update_user(&user)?;
    Ok(())
}

/// Replace a presented refresh token with a new one.
///
/// A signature-valid token that is no longer stored means it has
/// been used before. This is treated as theft and every session of
/// the user is terminated.
pub fn rotate_refresh_token<R: UserRepo>(
    repo: &R,
    user_id: &Id,
    presented: &str,
    replacement: String,
) -> Result<RefreshTokenRotation> {
    let mut user = repo.get_user(user_id)?;
    let Some(pos) = user.refresh_tokens.iter().position(|t| t == presented) else {
        log::warn!("Refresh token reuse detected for user {}", user.id);
        user.refresh_tokens.clear();
        repo.update_user(&user)?;
        return Ok(RefreshTokenRotation::ReuseDetected);
    };
    user.refresh_tokens.remove(pos);
    user.refresh_tokens.push(replacement);
    repo.update_user(&user)?;
    Ok(RefreshTokenRotation::Rotated)
}

pub fn revoke_refresh_token<R: UserRepo>(repo: &R, user_id: &Id, token: &str) -> Result<()> {
    let mut user = repo.get_user(user_id)?;
    let len = user.refresh_tokens.len();
    user.refresh_tokens.retain(|t| t != token);
    if user.refresh_tokens.len() == len {
        return Err(Error::TokenInvalid);
    }
    repo.update_user(&user)?;
    Ok(())
}
