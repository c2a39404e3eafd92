use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id             : Id,
    pub first_name     : Option<String>,
    pub last_name      : Option<String>,
    pub email          : EmailAddress,
    pub password       : Password,
    pub phone_number   : Option<String>,
    /// Public path of the uploaded profile picture.
    pub picture        : Option<String>,
    /// Refresh tokens that have been handed out and are still accepted.
    pub refresh_tokens : Vec<String>,
}

impl User {
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}
