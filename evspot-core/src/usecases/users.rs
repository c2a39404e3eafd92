use super::prelude::*;
use crate::util::validate::{self, non_blank};

pub fn get_user<R: UserRepo>(repo: &R, id: &Id) -> Result<User> {
    Ok(repo.get_user(id)?)
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Overwrite the provided profile fields.
///
/// Blank values are ignored and never clear a field.
pub fn update_user<R: UserRepo>(
    repo: &R,
    logged_in: &Id,
    id: &Id,
    update: UpdateUser,
) -> Result<User> {
    if logged_in != id {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(id)?;
    let UpdateUser {
        first_name,
        last_name,
        phone_number,
    } = update;
    if let Some(phone) = non_blank(phone_number) {
        if !validate::is_valid_phone_number(&phone) {
            return Err(Error::Phone);
        }
        user.phone_number = Some(phone);
    }
    if let Some(first_name) = non_blank(first_name) {
        user.first_name = Some(first_name);
    }
    if let Some(last_name) = non_blank(last_name) {
        user.last_name = Some(last_name);
    }
    repo.update_user(&user)?;
    Ok(user)
}

pub fn set_user_picture<R: UserRepo>(
    repo: &R,
    logged_in: &Id,
    id: &Id,
    picture: String,
) -> Result<User> {
    if logged_in != id {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(id)?;
    user.picture = Some(picture);
    repo.update_user(&user)?;
    Ok(user)
}
