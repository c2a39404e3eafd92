use super::prelude::*;
use crate::{
    gateways::geocode::GeoCodingGateway,
    util::validate::{non_blank, AutoCorrect, Validate},
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewStation {
    pub kind          : ChargerKind,
    pub location      : Option<String>,
    pub lat           : Option<f64>,
    pub lng           : Option<f64>,
    pub price         : Option<f64>,
    pub rating        : Option<f64>,
    pub charging_rate : Option<f64>,
    pub picture       : Option<String>,
    pub description   : Option<String>,
}

/// Determine the position of a station.
///
/// Explicit coordinates win. Without them the location text is
/// resolved by the geocoding gateway, if there is one.
pub fn resolve_station_position<G>(
    geo: Option<&G>,
    lat: Option<f64>,
    lng: Option<f64>,
    location: Option<&str>,
) -> Result<Option<MapPoint>>
where
    G: GeoCodingGateway + ?Sized,
{
    match (lat, lng) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
            .map(Some)
            .ok_or(Error::InvalidPosition),
        (None, None) => {
            let (Some(geo), Some(addr)) = (geo, location) else {
                return Ok(None);
            };
            let pos = geo
                .resolve_address_lat_lng(addr)
                .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng));
            if pos.is_none() {
                log::warn!("Could not resolve address '{addr}'");
            }
            Ok(pos)
        }
        _ => Err(Error::InvalidPosition),
    }
}

/// Validate a new station and resolve its position.
///
/// Does not touch the repository, so slow geocoding requests can run
/// outside of any transaction.
pub fn prepare_new_station<G>(geo: Option<&G>, owner: &Id, s: NewStation) -> Result<ChargingStation>
where
    G: GeoCodingGateway + ?Sized,
{
    let NewStation {
        kind,
        location,
        lat,
        lng,
        price,
        rating,
        charging_rate,
        picture,
        description,
    } = s;
    let price = price.ok_or(Error::MissingField("price"))?;
    let location = non_blank(location);
    let pos = resolve_station_position(geo, lat, lng, location.as_deref())?;
    let station = ChargingStation {
        id: Id::new(),
        kind,
        location,
        pos,
        price,
        rating: rating.unwrap_or_default(),
        charging_rate: charging_rate.unwrap_or_default(),
        picture,
        description,
        owner: Some(owner.clone()),
        reactions: Default::default(),
    }
    .auto_correct();
    station.validate()?;
    Ok(station)
}

pub fn store_new_station<R: StationRepo>(repo: &R, station: &ChargingStation) -> Result<()> {
    log::debug!("Creating new {} station {}", station.kind, station.id);
    repo.create_station(station)?;
    Ok(())
}

pub fn create_station<R, G>(
    repo: &R,
    geo: Option<&G>,
    owner: &Id,
    s: NewStation,
) -> Result<ChargingStation>
where
    R: StationRepo,
    G: GeoCodingGateway + ?Sized,
{
    let station = prepare_new_station(geo, owner, s)?;
    store_new_station(repo, &station)?;
    Ok(station)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyGeoCoder, MockDb},
        *,
    };

    fn new_station() -> NewStation {
        NewStation {
            location: Some("Storgata 1, Oslo".into()),
            price: Some(3.5),
            charging_rate: Some(22.0),
            ..Default::default()
        }
    }

    #[test]
    fn create_station_with_coordinates() {
        let db = MockDb::default();
        let owner = Id::new();
        let s = NewStation {
            lat: Some(59.91),
            lng: Some(10.75),
            ..new_station()
        };
        let station = create_station(&db, None::<&DummyGeoCoder>, &owner, s).unwrap();
        assert!(station.is_owned_by(&owner));
        assert_eq!(0.0, station.rating);
        assert_eq!(MapPoint::try_from_lat_lng_deg(59.91, 10.75), station.pos);
        assert_eq!(station, db.get_station(&station.id).unwrap());
    }

    #[test]
    fn create_station_with_geocoded_location() {
        let db = MockDb::default();
        let geo = DummyGeoCoder::resolving(60.0, 11.0);
        let station = create_station(&db, Some(&geo), &Id::new(), new_station()).unwrap();
        assert_eq!(MapPoint::try_from_lat_lng_deg(60.0, 11.0), station.pos);
    }

    #[test]
    fn prepared_station_is_not_stored() {
        let db = MockDb::default();
        let geo = DummyGeoCoder::resolving(60.0, 11.0);
        let station = prepare_new_station(Some(&geo), &Id::new(), new_station()).unwrap();
        assert_eq!(MapPoint::try_from_lat_lng_deg(60.0, 11.0), station.pos);
        assert_eq!(0, db.count_stations().unwrap());
        store_new_station(&db, &station).unwrap();
        assert_eq!(station, db.get_station(&station.id).unwrap());
    }

    #[test]
    fn create_station_with_unresolved_location() {
        let db = MockDb::default();
        let geo = DummyGeoCoder::default();
        let station = create_station(&db, Some(&geo), &Id::new(), new_station()).unwrap();
        assert_eq!(None, station.pos);
        assert_eq!(1, db.count_stations().unwrap());
    }

    #[test]
    fn create_station_without_price() {
        let db = MockDb::default();
        let s = NewStation {
            price: None,
            ..new_station()
        };
        assert!(matches!(
            create_station(&db, None::<&DummyGeoCoder>, &Id::new(), s),
            Err(Error::MissingField("price"))
        ));
    }

    #[test]
    fn create_station_with_invalid_values() {
        let db = MockDb::default();
        let owner = Id::new();
        let invalid = [
            (
                NewStation {
                    price: Some(-0.5),
                    ..new_station()
                },
                "price",
            ),
            (
                NewStation {
                    rating: Some(6.0),
                    ..new_station()
                },
                "rating",
            ),
            (
                NewStation {
                    lat: Some(91.0),
                    lng: Some(10.0),
                    ..new_station()
                },
                "position",
            ),
            (
                NewStation {
                    lat: Some(59.0),
                    ..new_station()
                },
                "position",
            ),
        ];
        for (s, what) in invalid {
            let res = create_station(&db, None::<&DummyGeoCoder>, &owner, s);
            match what {
                "price" => assert!(matches!(res, Err(Error::Price))),
                "rating" => assert!(matches!(res, Err(Error::RatingValue))),
                _ => assert!(matches!(res, Err(Error::InvalidPosition))),
            }
        }
        assert_eq!(0, db.count_stations().unwrap());
    }
}
