use rocket::form::Form;

use super::{upload::Upload, *};

/// Parse `sw_lat,sw_lng,ne_lat,ne_lng`.
fn extract_bbox(s: &str) -> result::Result<MapBbox, ParameterError> {
    let c = s
        .split(',')
        .map(|x| x.trim().parse::<f64>())
        .collect::<result::Result<Vec<_>, _>>()
        .map_err(|_| ParameterError::Bbox)?;
    match c[..] {
        [sw_lat, sw_lng, ne_lat, ne_lng] => {
            let sw = MapPoint::try_from_lat_lng_deg(sw_lat, sw_lng).ok_or(ParameterError::Bbox)?;
            let ne = MapPoint::try_from_lat_lng_deg(ne_lat, ne_lng).ok_or(ParameterError::Bbox)?;
            Ok(MapBbox::new(sw, ne))
        }
        _ => Err(ParameterError::Bbox),
    }
}

#[get("/stations?<kind>&<bbox>")]
pub fn get_stations(
    db: sqlite::Connections,
    kind: Option<&str>,
    bbox: Option<&str>,
) -> Result<Vec<json::Station>> {
    let query = usecases::StationQuery {
        kind: charger_kind(kind)?,
        bbox: bbox.map(extract_bbox).transpose()?,
    };
    let stations = usecases::query_stations(&db.shared()?, &query)?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

#[get("/stations/<id>")]
pub fn get_station(db: sqlite::Connections, id: &str) -> Result<json::StationWithComments> {
    let station = usecases::load_station_with_comments(&db.shared()?, &id.into())?;
    Ok(Json(station.into()))
}

#[get("/users/<id>/stations")]
pub fn get_stations_of_user(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<Vec<json::Station>> {
    auth.user_id()?;
    let stations = usecases::stations_of_user(&db.shared()?, &id.into())?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

#[get("/stations/<id>/owner")]
pub fn get_station_owner(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::User> {
    auth.user_id()?;
    let owner = usecases::station_owner(&db.shared()?, &id.into())?;
    Ok(Json(owner.into()))
}

#[post("/stations", format = "application/json", data = "<station>")]
pub async fn post_station(
    db: sqlite::Connections,
    auth: Auth,
    geo: &State<GeoCoding>,
    station: JsonResult<'_, json::NewStation>,
) -> Result<json::Station> {
    let owner = auth.user_id()?.clone();
    let new_station = from_json::new_station(station?.into_inner());
    let geo = geo.inner().clone();
    let station = blocking(move || {
        Ok(flows::create_station(
            &db,
            geo.0.as_deref(),
            &owner,
            new_station,
        )?)
    })
    .await?;
    Ok(Json(station.into()))
}

#[put("/stations/<id>", format = "application/json", data = "<update>")]
pub async fn put_station(
    db: sqlite::Connections,
    auth: Auth,
    geo: &State<GeoCoding>,
    id: &str,
    update: JsonResult<'_, json::NewStation>,
) -> Result<json::Station> {
    let logged_in = auth.user_id()?.clone();
    let update = from_json::update_station(update?.into_inner());
    let id = Id::from(id);
    let geo = geo.inner().clone();
    let station = blocking(move || {
        Ok(flows::update_station(
            &db,
            geo.0.as_deref(),
            &logged_in,
            &id,
            update,
        )?)
    })
    .await?;
    Ok(Json(station.into()))
}

#[delete("/stations/<id>")]
pub fn delete_station(db: sqlite::Connections, auth: Auth, id: &str) -> Result<()> {
    flows::delete_station(&db, auth.user_id()?, &id.into())?;
    Ok(Json(()))
}

#[post("/stations/<id>/picture", data = "<upload>")]
pub async fn post_station_picture(
    db: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    id: &str,
    mut upload: Form<Upload<'_>>,
) -> Result<json::Station> {
    let user_id = auth.user_id()?.clone();
    let id = Id::from(id);
    let owner = db.shared()?.get_station(&id)?.owner;
    if owner.as_ref() != Some(&user_id) {
        return Err(ParameterError::Forbidden.into());
    }
    let picture = upload::store(&cfg.upload_dir, &user_id, &mut upload.file).await?;
    let station = flows::set_station_picture(&db, &user_id, &id, picture)?;
    Ok(Json(station.into()))
}

#[post("/stations/<id>/reaction", format = "application/json", data = "<reaction>")]
pub fn post_station_reaction(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    reaction: JsonResult<json::ReactionRequest>,
) -> Result<json::Reactions> {
    let reaction = reaction?.into_inner().reaction;
    let reactions =
        flows::toggle_station_reaction(&db, auth.user_id()?, &id.into(), reaction.into())?;
    Ok(Json(reactions.into()))
}

#[get("/stations/<id>/charging-time")]
pub fn get_charging_time(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::ChargingTimeEstimate> {
    let estimate = usecases::estimate_charging_time(&db.shared()?, auth.user_id()?, &id.into())?;
    Ok(Json(to_json::charging_time_estimate(estimate)))
}

#[get("/stations/<id>/route?<lat>&<lng>")]
pub async fn get_route(
    db: sqlite::Connections,
    routing: &State<Routing>,
    id: &str,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<json::Route> {
    let from = lat
        .zip(lng)
        .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng))
        .ok_or(ParameterError::InvalidPosition)?;
    let gateway = routing.gateway()?;
    let id = Id::from(id);
    let route = blocking(move || {
        Ok(usecases::route_to_station(
            &db.shared()?,
            &*gateway,
            &id,
            from,
        )?)
    })
    .await?;
    Ok(Json(to_json::route(route)))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use super::extract_bbox;

    #[test]
    fn parse_bbox() {
        assert!(extract_bbox("59.0,10.0,60.0,11.0").is_ok());
        assert!(extract_bbox("59.0, 10.0, 60.0, 11.0").is_ok());
        assert!(extract_bbox("5,4,3").is_err());
        assert!(extract_bbox("a,b,c,d").is_err());
        assert!(extract_bbox("95.0,10.0,60.0,11.0").is_err());
    }

    #[test]
    fn create_and_list_stations() {
        let (client, _) = setup();
        let owner = register_and_login(&client, "owner@example.com");

        let res = client
            .post("/stations")
            .header(ContentType::JSON)
            .body(r#"{"kind":"batteri","lat":59.91,"lng":10.75,"price":"3.5"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);

        let oslo = create_station(&client, &owner, r#"{"kind":"batteri","lat":59.91,"lng":10.75,"price":"3.5"}"#);
        let bergen = create_station(&client, &owner, r#"{"lat":60.39,"lng":5.32,"price":2}"#);
        assert_eq!("standard", bergen["kind"]);
        assert_eq!(Some(3.5), oslo["price"].as_f64());

        let ids = |res: LocalResponse| {
            let stations: Vec<serde_json::Value> =
                serde_json::from_str(&res.into_string().unwrap()).unwrap();
            stations
                .into_iter()
                .map(|s| s["id"].as_str().unwrap().to_owned())
                .collect::<Vec<_>>()
        };
        assert_eq!(2, ids(client.get("/stations").dispatch()).len());
        assert_eq!(
            vec![oslo["id"].as_str().unwrap().to_owned()],
            ids(client.get("/stations?kind=batteri").dispatch())
        );
        assert_eq!(
            vec![bergen["id"].as_str().unwrap().to_owned()],
            ids(client.get("/stations?bbox=60.0,5.0,61.0,6.0").dispatch())
        );
        assert_eq!(
            client.get("/stations?bbox=1,2,3").dispatch().status(),
            Status::BadRequest
        );
        assert_eq!(
            client.get("/stations?kind=wireless").dispatch().status(),
            Status::BadRequest
        );
    }

    #[test]
    fn geocode_station_location() {
        let (client, _) = setup();
        let owner = register_and_login(&client, "owner@example.com");
        let station = create_station(
            &client,
            &owner,
            r#"{"location":"Storgata 1, Oslo","price":1}"#,
        );
        assert_eq!(Some(DUMMY_LAT), station["latitude"].as_f64());
        assert_eq!(Some(DUMMY_LNG), station["longitude"].as_f64());
    }

    #[test]
    fn update_and_delete_by_owner_only() {
        let (client, db) = setup();
        let owner = register_and_login(&client, "owner@example.com");
        let other = register_and_login(&client, "other@example.com");
        let station = create_station(&client, &owner, r#"{"price":1}"#);
        let url = format!("/stations/{}", station["id"].as_str().unwrap());

        let res = client
            .put(url.as_str())
            .header(ContentType::JSON)
            .header(bearer(&other))
            .body(r#"{"price":2}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .put(url.as_str())
            .header(ContentType::JSON)
            .header(bearer(&owner))
            .body(r#"{"price":2,"description":"Next to the bakery"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let updated: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(Some(2.0), updated["price"].as_f64());

        assert_eq!(
            client.delete(url.as_str()).header(bearer(&other)).dispatch().status(),
            Status::Forbidden
        );
        assert_eq!(
            client.delete(url.as_str()).header(bearer(&owner)).dispatch().status(),
            Status::Ok
        );
        assert_eq!(client.get(url.as_str()).dispatch().status(), Status::NotFound);
        assert_eq!(0, db.shared().unwrap().count_stations().unwrap());
    }

    #[test]
    fn station_with_comments_and_owner() {
        let (client, _) = setup();
        let owner = register_and_login(&client, "owner@example.com");
        let driver = register_and_login(&client, "driver@example.com");
        let station = create_station(&client, &owner, r#"{"price":1}"#);
        let id = station["id"].as_str().unwrap();

        let res = client
            .post(format!("/stations/{id}/comments"))
            .header(ContentType::JSON)
            .header(bearer(&driver))
            .body(r#"{"text":"Fast and cheap","rating":"4"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let res = client.get(format!("/stations/{id}")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let station: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(Some(4.0), station["rating"].as_f64());
        assert_eq!("Fast and cheap", station["comments"][0]["text"]);

        let res = client
            .get(format!("/stations/{id}/owner"))
            .header(bearer(&driver))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let user: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!("owner@example.com", user["email"]);

        let res = client
            .get(format!("/users/{}/stations", owner.user_id))
            .header(bearer(&driver))
            .dispatch();
        let stations: Vec<serde_json::Value> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(1, stations.len());
    }

    #[test]
    fn toggle_station_reaction() {
        let (client, _) = setup();
        let owner = register_and_login(&client, "owner@example.com");
        let station = create_station(&client, &owner, r#"{"price":1}"#);
        let url = format!("/stations/{}/reaction", station["id"].as_str().unwrap());
        let react = |reaction: &str| {
            let res = client
                .post(url.as_str())
                .header(ContentType::JSON)
                .header(bearer(&owner))
                .body(format!(r#"{{"reaction":"{reaction}"}}"#))
                .dispatch();
            assert_eq!(res.status(), Status::Ok);
            let r: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
            (r["likes"].as_u64().unwrap(), r["dislikes"].as_u64().unwrap())
        };
        assert_eq!((1, 0), react("like"));
        assert_eq!((0, 1), react("dislike"));
        assert_eq!((0, 0), react("dislike"));
    }

    #[test]
    fn upload_station_picture() {
        let (client, _) = setup();
        let owner = register_and_login(&client, "owner@example.com");
        let other = register_and_login(&client, "other@example.com");
        let station = create_station(&client, &owner, r#"{"price":1}"#);
        let url = format!("/stations/{}/picture", station["id"].as_str().unwrap());

        let res = client
            .post(url.as_str())
            .header(bearer(&other))
            .header(multipart_content_type())
            .body(multipart_body("charger", "image/jpeg", b"JPEG"))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .post(url.as_str())
            .header(bearer(&owner))
            .header(multipart_content_type())
            .body(multipart_body("charger", "image/jpeg", b"JPEG"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let station: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        let picture = station["picture"].as_str().unwrap().to_owned();
        assert!(picture.starts_with(&format!("/uploads/{}/", owner.user_id)));

        // The stored file is served again
        let res = client.get(picture.as_str()).dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(b"JPEG".to_vec(), res.into_bytes().unwrap());
    }

    #[test]
    fn charging_time_and_route() {
        let (client, _) = setup();
        let owner = register_and_login(&client, "owner@example.com");
        let station = create_station(
            &client,
            &owner,
            r#"{"lat":59.91,"lng":10.75,"price":1,"chargingRate":"11"}"#,
        );
        let id = station["id"].as_str().unwrap();

        let res = client
            .get(format!("/stations/{id}/charging-time"))
            .header(bearer(&owner))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let estimate: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert!(estimate["car"].is_null());

        let res = client
            .post("/cars/generate")
            .header(ContentType::JSON)
            .header(bearer(&owner))
            .body(r#"{"brand":"Hyundai","model":"Kona","year":"2021"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let res = client
            .get(format!("/stations/{id}/charging-time"))
            .header(bearer(&owner))
            .dispatch();
        let estimate: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        // 66 kWh at 11 kW
        assert_eq!(Some(6.0), estimate["hours"].as_f64());

        let res = client
            .get(format!("/stations/{id}/route?lat=59.95&lng=10.80"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let route: serde_json::Value = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(Some(DUMMY_DISTANCE), route["distance"].as_f64());

        let res = client.get(format!("/stations/{id}/route?lat=95&lng=10")).dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn route_without_gateway() {
        let (client, _) = setup_with_gateways(Gateways::default());
        let owner = register_and_login(&client, "owner@example.com");
        let station = create_station(&client, &owner, r#"{"lat":59.91,"lng":10.75,"price":1}"#);
        let res = client
            .get(format!(
                "/stations/{}/route?lat=59.95&lng=10.80",
                station["id"].as_str().unwrap()
            ))
            .dispatch();
        assert_eq!(res.status(), Status::BadGateway);
    }
}
