use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::register_user(conn, new_user))?;
    info!("Registered new user {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_reject_duplicate_email() {
        let fixture = BackendFixture::new();
        let user = flows::register_user(&fixture.db_connections, new_user("a@example.com")).unwrap();
        assert_eq!("a@example.com", user.email.as_str());
        assert!(user.password.verify("secret123"));
        assert!(user.refresh_tokens.is_empty());

        let err = flows::register_user(&fixture.db_connections, new_user(" a@example.com "))
            .unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::UserExists)));
    }

    #[test]
    fn invalid_password_stores_nothing() {
        let fixture = BackendFixture::new();
        let mut u = new_user("b@example.com");
        u.password = "12345".into();
        let err = flows::register_user(&fixture.db_connections, u).unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::Password)));
        assert_eq!(0, fixture.db_connections.shared().unwrap().count_users().unwrap());
    }
}
