use rocket::form::Form;

use super::{upload::Upload, *};

fn token_pair(
    jwt_state: &jwt::JwtState,
    user_id: &Id,
    refresh_token: String,
) -> result::Result<json::TokenPair, ApiError> {
    let access_token = jwt_state.generate_access_token(user_id)?;
    Ok(json::TokenPair {
        access_token,
        refresh_token,
        user_id: user_id.to_string(),
    })
}

#[post("/auth/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: sqlite::Connections,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(&db, new_user)?;
    Ok(Json(user.into()))
}

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::TokenPair> {
    let login = login?.into_inner();
    let credentials = usecases::Credentials {
        email: &login.email,
        password: &login.password,
    };
    let (user, refresh_token) = flows::login(&db, &credentials, |user| {
        jwt_state.generate_refresh_token(&user.id)
    })
    .map_err(|err| {
        debug!("Login with email '{}' failed: {}", login.email, err);
        err
    })?;
    Ok(Json(token_pair(jwt_state, &user.id, refresh_token)?))
}

#[post("/auth/refresh", format = "application/json", data = "<token>")]
pub fn post_refresh(
    db: sqlite::Connections,
    token: JsonResult<json::RefreshToken>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::TokenPair> {
    let presented = token?.into_inner().refresh_token;
    let user_id = jwt_state.validate_refresh_token(&presented)?;
    let refresh_token = jwt_state.generate_refresh_token(&user_id)?;
    flows::refresh(&db, &user_id, &presented, refresh_token.clone())?;
    Ok(Json(token_pair(jwt_state, &user_id, refresh_token)?))
}

#[post("/auth/logout", format = "application/json", data = "<token>")]
pub fn post_logout(
    db: sqlite::Connections,
    token: JsonResult<json::RefreshToken>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<()> {
    let presented = token?.into_inner().refresh_token;
    let user_id = jwt_state.validate_refresh_token(&presented)?;
    flows::logout(&db, &user_id, &presented)?;
    Ok(Json(()))
}

#[get("/users/<id>")]
pub fn get_user(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::User> {
    auth.user_id()?;
    let user = usecases::get_user(&db.shared()?, &id.into())?;
    Ok(Json(user.into()))
}

#[put("/users/<id>", format = "application/json", data = "<update>")]
pub fn put_user(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    update: JsonResult<json::UpdateUser>,
) -> Result<json::User> {
    let update = from_json::update_user(update?.into_inner());
    let user = flows::update_user(&db, auth.user_id()?, &id.into(), update)?;
    Ok(Json(user.into()))
}

#[post("/users/<id>/picture", data = "<upload>")]
pub async fn post_user_picture(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    id: &str,
    mut upload: Form<Upload<'_>>,
) -> Result<json::User> {
    let user_id = auth.user_id()?.clone();
    if user_id.as_str() != id {
        return Err(ParameterError::Forbidden.into());
    }
    let picture = upload::store(&cfg.upload_dir, &user_id, &mut upload.file).await?;
    let user = flows::set_user_picture(&db, &user_id, &user_id, picture)?;
    Ok(Json(user.into()))
}
