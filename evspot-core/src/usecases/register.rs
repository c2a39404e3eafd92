use super::prelude::*;
use crate::util::validate::{self, non_blank};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

pub fn register_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let email = u.email.trim().parse::<EmailAddress>()?;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::Email);
    }
    let password = u.password.parse::<Password>()?;
    let phone_number = non_blank(u.phone_number);
    if let Some(phone) = &phone_number {
        if !validate::is_valid_phone_number(phone) {
            return Err(Error::Phone);
        }
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        first_name: non_blank(u.first_name),
        last_name: non_blank(u.last_name),
        email,
        password,
        phone_number,
        picture: None,
        refresh_tokens: vec![],
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
