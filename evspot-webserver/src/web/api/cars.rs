use super::*;

#[post("/cars/generate", format = "application/json", data = "<car>")]
pub async fn post_generate_car(
    db: sqlite::Connections,
    auth: Auth,
    content: &State<ContentGeneration>,
    car: JsonResult<'_, json::NewCar>,
) -> Result<json::CarProfile> {
    let owner = auth.user_id()?.clone();
    let car = from_json::new_car(car?.into_inner());
    let gateway = content.gateway()?;
    let profile =
        blocking(move || Ok(flows::generate_car_profile(&db, &*gateway, &owner, car)?)).await?;
    Ok(Json(profile.into()))
}

#[get("/users/<id>/cars")]
pub fn get_cars_of_user(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<Vec<json::CarProfile>> {
    auth.user_id()?;
    let profiles = usecases::car_profiles_of_user(&db.shared()?, &id.into())?;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}
