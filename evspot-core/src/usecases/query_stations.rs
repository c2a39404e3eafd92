use super::prelude::*;
use crate::{repositories::Error as RepoError, util::validate};

#[derive(Debug, Clone, Default)]
pub struct StationQuery {
    pub kind: Option<ChargerKind>,
    pub bbox: Option<MapBbox>,
}

pub fn query_stations<R: StationRepo>(repo: &R, query: &StationQuery) -> Result<Vec<ChargingStation>> {
    let StationQuery { kind, bbox } = query;
    if let Some(bbox) = bbox {
        if !validate::is_valid_bbox(bbox) {
            return Err(Error::Bbox);
        }
    }
    let stations = repo
        .all_stations(*kind)?
        .into_iter()
        .filter(|s| match (bbox, s.pos) {
            (Some(bbox), Some(pos)) => bbox.contains_point(pos),
            (Some(_), None) => false,
            (None, _) => true,
        })
        .collect();
    Ok(stations)
}

pub fn load_station_with_comments<R>(repo: &R, id: &Id) -> Result<(ChargingStation, Vec<Comment>)>
where
    R: StationRepo + CommentRepo,
{
    let station = repo.get_station(id)?;
    let comments = repo.load_comments_of_station(id)?;
    Ok((station, comments))
}

pub fn stations_of_user<R: StationRepo>(repo: &R, user_id: &Id) -> Result<Vec<ChargingStation>> {
    Ok(repo.stations_of_owner(user_id)?)
}

pub fn station_owner<R>(repo: &R, station_id: &Id) -> Result<User>
where
    R: StationRepo + UserRepo,
{
    let station = repo.get_station(station_id)?;
    let owner = station.owner.ok_or(RepoError::NotFound)?;
    Ok(repo.get_user(&owner)?)
}
