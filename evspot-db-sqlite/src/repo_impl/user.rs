use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn new_user(u: &User) -> models::NewUser<'_> {
    models::NewUser {
        id: u.id.as_str(),
        email: u.email.as_str(),
        password: u.password.as_ref(),
        first_name: u.first_name.as_deref(),
        last_name: u.last_name.as_deref(),
        phone_number: u.phone_number.as_deref(),
        picture: u.picture.as_deref(),
    }
}

fn insert_refresh_tokens(conn: &mut SqliteConnection, user_rowid: i64, tokens: &[String]) -> Result<()> {
    if tokens.is_empty() {
        return Ok(());
    }
    let new_tokens: Vec<_> = tokens
        .iter()
        .map(|token| models::NewUserRefreshToken {
            user_rowid,
            token: token.as_str(),
        })
        .collect();
    diesel::insert_into(schema::user_refresh_token::table)
        .values(&new_tokens)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    diesel::insert_into(schema::users::table)
        .values(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = resolve_user_rowid(conn, &u.id)?;
    insert_refresh_tokens(conn, rowid, &u.refresh_tokens)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::{user_refresh_token::dsl as t_dsl, users::dsl};
    let rowid = resolve_user_rowid(conn, &u.id)?;
    diesel::update(dsl::users.filter(dsl::rowid.eq(rowid)))
        .set(&new_user(u))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(t_dsl::user_refresh_token.filter(t_dsl::user_rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_refresh_tokens(conn, rowid, &u.refresh_tokens)?;
    Ok(())
}

fn load_user(conn: &mut SqliteConnection, entity: models::UserEntity) -> Result<User> {
    use schema::user_refresh_token::dsl;
    let models::UserEntity {
        rowid,
        id,
        email,
        password,
        first_name,
        last_name,
        phone_number,
        picture,
    } = entity;
    let refresh_tokens = dsl::user_refresh_token
        .select(dsl::token)
        .filter(dsl::user_rowid.eq(rowid))
        .order_by(dsl::rowid)
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    Ok(User {
        id: id.into(),
        first_name,
        last_name,
        email: EmailAddress::new_unchecked(email),
        password: Password::from_hash(password),
        phone_number,
        picture,
        refresh_tokens,
    })
}

fn get_user(conn: &mut SqliteConnection, id: &Id) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(conn, entity)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|entity| load_user(conn, entity))
        .transpose()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
