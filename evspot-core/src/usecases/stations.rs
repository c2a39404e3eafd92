use super::{prelude::*, resolve_station_position};
use crate::{
    gateways::geocode::GeoCodingGateway,
    util::validate::{non_blank, AutoCorrect, Validate},
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UpdateStation {
    pub kind          : Option<ChargerKind>,
    pub location      : Option<String>,
    pub lat           : Option<f64>,
    pub lng           : Option<f64>,
    pub price         : Option<f64>,
    pub rating        : Option<f64>,
    pub charging_rate : Option<f64>,
    pub picture       : Option<String>,
    pub description   : Option<String>,
}

fn get_owned_station<R: StationRepo>(repo: &R, logged_in: &Id, id: &Id) -> Result<ChargingStation> {
    let station = repo.get_station(id)?;
    if !station.is_owned_by(logged_in) {
        log::debug!("User {logged_in} is not the owner of station {id}");
        return Err(Error::Forbidden);
    }
    Ok(station)
}

/// An update whose new position has already been resolved.
#[derive(Debug, Clone)]
pub struct StationUpdate {
    id: Id,
    pos: Option<MapPoint>,
    update: UpdateStation,
}

/// Check the permission and resolve the position of an update.
///
/// Works on a station loaded beforehand, so slow geocoding requests
/// don't hold any lock. The station is loaded again when the update is
/// stored, so concurrent changes of other fields are not lost.
pub fn prepare_station_update<G>(
    station: &ChargingStation,
    geo: Option<&G>,
    logged_in: &Id,
    mut update: UpdateStation,
) -> Result<StationUpdate>
where
    G: GeoCodingGateway + ?Sized,
{
    if !station.is_owned_by(logged_in) {
        log::debug!("User {logged_in} is not the owner of station {}", station.id);
        return Err(Error::Forbidden);
    }
    update.location = non_blank(update.location.take());
    let (lat, lng) = (update.lat.take(), update.lng.take());
    let relocated = update.location.is_some() && update.location != station.location;
    let pos = if lat.is_some() || lng.is_some() {
        resolve_station_position(geo, lat, lng, None)?
    } else if relocated {
        resolve_station_position(geo, None, None, update.location.as_deref())?
    } else {
        None
    };
    Ok(StationUpdate {
        id: station.id.clone(),
        pos,
        update,
    })
}

pub fn store_station_update<R: StationRepo>(
    repo: &R,
    logged_in: &Id,
    station_update: StationUpdate,
) -> Result<ChargingStation> {
    let StationUpdate { id, pos, update } = station_update;
    let mut station = get_owned_station(repo, logged_in, &id)?;
    let UpdateStation {
        kind,
        location,
        lat: _,
        lng: _,
        price,
        rating,
        charging_rate,
        picture,
        description,
    } = update;
    if pos.is_some() {
        station.pos = pos;
    }
    if location.is_some() {
        station.location = location;
    }
    if let Some(kind) = kind {
        station.kind = kind;
    }
    if let Some(price) = price {
        station.price = price;
    }
    if let Some(rating) = rating {
        station.rating = rating;
    }
    if let Some(rate) = charging_rate {
        station.charging_rate = rate;
    }
    if picture.is_some() {
        station.picture = picture;
    }
    if description.is_some() {
        station.description = description;
    }
    let station = station.auto_correct();
    station.validate()?;
    repo.update_station(&station)?;
    Ok(station)
}

pub fn update_station<R, G>(
    repo: &R,
    geo: Option<&G>,
    logged_in: &Id,
    id: &Id,
    update: UpdateStation,
) -> Result<ChargingStation>
where
    R: StationRepo,
    G: GeoCodingGateway + ?Sized,
{
    let station = repo.get_station(id)?;
    let station_update = prepare_station_update(&station, geo, logged_in, update)?;
    store_station_update(repo, logged_in, station_update)
}

pub fn set_station_picture<R: StationRepo>(
    repo: &R,
    logged_in: &Id,
    id: &Id,
    picture: String,
) -> Result<ChargingStation> {
    let mut station = get_owned_station(repo, logged_in, id)?;
    station.picture = Some(picture);
    repo.update_station(&station)?;
    Ok(station)
}

/// Delete a station with its comments and reactions.
///
/// Bookings of the station are kept.
pub fn delete_station<R: StationRepo>(repo: &R, logged_in: &Id, id: &Id) -> Result<()> {
    get_owned_station(repo, logged_in, id)?;
    log::debug!("Deleting station {id}");
    repo.delete_station(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyGeoCoder, MockDb},
        *,
    };
    use crate::repositories::Error as RepoError;
    use evspot_entities::builders::*;

    fn db_with_station(owner: &Id) -> (MockDb, Id) {
        let db = MockDb::default();
        let station = ChargingStation::build()
            .owner(owner)
            .location("Storgata 1, Oslo")
            .pos(59.91, 10.75)
            .price(2.0)
            .finish();
        let id = station.id.clone();
        db.stations.borrow_mut().push(station);
        (db, id)
    }

    #[test]
    fn update_own_station() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        let update = UpdateStation {
            price: Some(4.2),
            kind: Some(ChargerKind::Batteri),
            description: Some(" Fast charger ".into()),
            ..Default::default()
        };
        let station = update_station(&db, None::<&DummyGeoCoder>, &owner, &id, update).unwrap();
        assert_eq!(4.2, station.price);
        assert_eq!(ChargerKind::Batteri, station.kind);
        assert_eq!(Some("Fast charger"), station.description.as_deref());
        assert_eq!(Some("Storgata 1, Oslo"), station.location.as_deref());
        assert_eq!(station, db.get_station(&id).unwrap());
    }

    #[test]
    fn update_station_of_someone_else() {
        let (db, id) = db_with_station(&Id::new());
        let err = update_station(
            &db,
            None::<&DummyGeoCoder>,
            &Id::new(),
            &id,
            UpdateStation::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Forbidden));
    }

    #[test]
    fn geocode_changed_location() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        let geo = DummyGeoCoder::resolving(63.43, 10.39);
        let update = UpdateStation {
            location: Some("Kongens gate 1, Trondheim".into()),
            ..Default::default()
        };
        let station = update_station(&db, Some(&geo), &owner, &id, update).unwrap();
        assert_eq!(MapPoint::try_from_lat_lng_deg(63.43, 10.39), station.pos);

        let update = UpdateStation {
            location: Some("Kongens gate 1, Trondheim".into()),
            lat: Some(1.0),
            lng: Some(2.0),
            ..Default::default()
        };
        let station = update_station(&db, Some(&geo), &owner, &id, update).unwrap();
        assert_eq!(MapPoint::try_from_lat_lng_deg(1.0, 2.0), station.pos);
    }

    #[test]
    fn keep_position_if_location_is_unchanged() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        let geo = DummyGeoCoder::resolving(0.0, 0.0);
        let update = UpdateStation {
            location: Some("Storgata 1, Oslo".into()),
            ..Default::default()
        };
        let station = update_station(&db, Some(&geo), &owner, &id, update).unwrap();
        assert_eq!(MapPoint::try_from_lat_lng_deg(59.91, 10.75), station.pos);
    }

    #[test]
    fn store_prepared_update_on_current_station() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        let geo = DummyGeoCoder::resolving(63.43, 10.39);
        let update = UpdateStation {
            location: Some("Kongens gate 1, Trondheim".into()),
            price: Some(5.0),
            ..Default::default()
        };
        let station = db.get_station(&id).unwrap();
        let prepared = prepare_station_update(&station, Some(&geo), &owner, update).unwrap();
        assert_eq!(2.0, db.get_station(&id).unwrap().price);

        // A comment changed the rating in the meantime
        db.stations.borrow_mut()[0].rating = 4.5;

        let station = store_station_update(&db, &owner, prepared).unwrap();
        assert_eq!(MapPoint::try_from_lat_lng_deg(63.43, 10.39), station.pos);
        assert_eq!(5.0, station.price);
        assert_eq!(4.5, station.rating);
        assert_eq!(station, db.get_station(&id).unwrap());
    }

    #[test]
    fn prepare_update_of_someone_else() {
        let (db, id) = db_with_station(&Id::new());
        let geo = DummyGeoCoder::resolving(63.43, 10.39);
        let update = UpdateStation {
            location: Some("Kongens gate 1, Trondheim".into()),
            ..Default::default()
        };
        let station = db.get_station(&id).unwrap();
        assert!(matches!(
            prepare_station_update(&station, Some(&geo), &Id::new(), update),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn reject_invalid_update() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        let update = UpdateStation {
            charging_rate: Some(-3.0),
            ..Default::default()
        };
        assert!(matches!(
            update_station(&db, None::<&DummyGeoCoder>, &owner, &id, update),
            Err(Error::ChargingRate)
        ));
        assert_eq!(0.0, db.get_station(&id).unwrap().charging_rate);
    }

    #[test]
    fn delete_station_with_comments() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        db.comments
            .borrow_mut()
            .push(Comment::build().station(&id).text("ok").finish());
        assert!(matches!(
            delete_station(&db, &Id::new(), &id),
            Err(Error::Forbidden)
        ));
        delete_station(&db, &owner, &id).unwrap();
        assert_eq!(0, db.count_stations().unwrap());
        assert!(db.comments.borrow().is_empty());
        assert!(matches!(
            delete_station(&db, &owner, &id),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn set_picture_of_own_station() {
        let owner = Id::new();
        let (db, id) = db_with_station(&owner);
        set_station_picture(&db, &owner, &id, "/uploads/a.jpg".into()).unwrap();
        assert_eq!(
            Some("/uploads/a.jpg"),
            db.get_station(&id).unwrap().picture.as_deref()
        );
    }
}
