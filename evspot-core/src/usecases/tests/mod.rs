use std::cell::RefCell;

use anyhow::anyhow;

use crate::{
    entities::*,
    gateways::{
        content::{CarContentGateway, CarModel, GeneratedCarContent},
        geocode::GeoCodingGateway,
        routing::{Route, RoutingGateway},
    },
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = Result<T, RepoError>;

trait Key {
    fn key(&self) -> &Id;
}

impl Key for User {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for ChargingStation {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for Comment {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for Booking {
    fn key(&self) -> &Id {
        &self.id
    }
}

impl Key for CarProfile {
    fn key(&self) -> &Id {
        &self.id
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &Id) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    let x = objects
        .iter_mut()
        .find(|x| x.key() == e.key())
        .ok_or(RepoError::NotFound)?;
    *x = e.clone();
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &Id) -> RepoResult<()> {
    let len = objects.len();
    objects.retain(|x| x.key() != id);
    if objects.len() == len {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub stations: RefCell<Vec<ChargingStation>>,
    pub comments: RefCell<Vec<Comment>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub car_profiles: RefCell<Vec<CarProfile>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn get_user(&self, id: &Id) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl StationRepo for MockDb {
    fn create_station(&self, station: &ChargingStation) -> RepoResult<()> {
        create(&mut self.stations.borrow_mut(), station.clone())
    }
    fn update_station(&self, station: &ChargingStation) -> RepoResult<()> {
        update(&mut self.stations.borrow_mut(), station)
    }
    fn delete_station(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.stations.borrow_mut(), id)?;
        self.comments.borrow_mut().retain(|c| &c.station_id != id);
        Ok(())
    }
    fn get_station(&self, id: &Id) -> RepoResult<ChargingStation> {
        get(&self.stations.borrow(), id)
    }
    fn all_stations(&self, kind: Option<ChargerKind>) -> RepoResult<Vec<ChargingStation>> {
        Ok(self
            .stations
            .borrow()
            .iter()
            .filter(|s| kind.map_or(true, |k| s.kind == k))
            .cloned()
            .collect())
    }
    fn stations_of_owner(&self, owner: &Id) -> RepoResult<Vec<ChargingStation>> {
        Ok(self
            .stations
            .borrow()
            .iter()
            .filter(|s| s.is_owned_by(owner))
            .cloned()
            .collect())
    }
    fn count_stations(&self) -> RepoResult<usize> {
        Ok(self.stations.borrow().len())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment.clone())
    }
    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        update(&mut self.comments.borrow_mut(), comment)
    }
    fn delete_comment(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.comments.borrow_mut(), id)
    }
    fn load_comment(&self, id: &Id) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id)
    }
    fn load_comments_of_station(&self, station_id: &Id) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| &c.station_id == station_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: &Booking) -> RepoResult<()> {
        create(&mut self.bookings.borrow_mut(), booking.clone())
    }
    fn update_booking(&self, booking: &Booking) -> RepoResult<()> {
        update(&mut self.bookings.borrow_mut(), booking)
    }
    fn delete_booking(&self, id: &Id) -> RepoResult<()> {
        delete(&mut self.bookings.borrow_mut(), id)
    }
    fn get_booking(&self, id: &Id) -> RepoResult<Booking> {
        get(&self.bookings.borrow(), id)
    }
    fn all_bookings(&self, kind: Option<ChargerKind>) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| kind.map_or(true, |k| b.kind == k))
            .cloned()
            .collect())
    }
    fn bookings_of_station(&self, station_id: &Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| &b.station_id == station_id)
            .cloned()
            .collect())
    }
    fn bookings_of_user(&self, user_id: &Id) -> RepoResult<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.is_booked_by(user_id))
            .cloned()
            .collect())
    }
}

impl CarProfileRepo for MockDb {
    fn create_car_profile(&self, profile: &CarProfile) -> RepoResult<()> {
        create(&mut self.car_profiles.borrow_mut(), profile.clone())
    }
    fn delete_car_profiles_of_owner(&self, owner: &Id) -> RepoResult<usize> {
        let mut profiles = self.car_profiles.borrow_mut();
        let len = profiles.len();
        profiles.retain(|p| &p.owner != owner);
        Ok(len - profiles.len())
    }
    fn car_profiles_of_owner(&self, owner: &Id) -> RepoResult<Vec<CarProfile>> {
        let mut profiles: Vec<_> = self
            .car_profiles
            .borrow()
            .iter()
            .filter(|p| &p.owner == owner)
            .cloned()
            .collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }
}

#[derive(Debug, Default)]
pub struct DummyGeoCoder {
    result: Option<(f64, f64)>,
}

impl DummyGeoCoder {
    pub fn resolving(lat: f64, lng: f64) -> Self {
        Self {
            result: Some((lat, lng)),
        }
    }
}

impl GeoCodingGateway for DummyGeoCoder {
    fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
        self.result
    }
}

#[derive(Debug)]
pub struct DummyRouter {
    available: bool,
}

impl Default for DummyRouter {
    fn default() -> Self {
        Self { available: true }
    }
}

impl DummyRouter {
    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl RoutingGateway for DummyRouter {
    fn driving_route(&self, _: MapPoint, _: MapPoint) -> anyhow::Result<Route> {
        if !self.available {
            return Err(anyhow!("routing service unavailable"));
        }
        Ok(Route {
            distance: 1000.0,
            duration: 60.0,
        })
    }
}

#[derive(Debug, Default)]
pub struct DummyContentGenerator {
    answer: Option<GeneratedCarContent>,
    last_request: RefCell<Option<CarModel>>,
}

impl DummyContentGenerator {
    pub fn answering(battery_capacity_kwh: Option<f64>, description: &str) -> Self {
        Self {
            answer: Some(GeneratedCarContent {
                battery_capacity_kwh,
                description: description.into(),
            }),
            last_request: Default::default(),
        }
    }
    pub fn failing() -> Self {
        Self::default()
    }
    pub fn last_request(&self) -> Option<CarModel> {
        self.last_request.borrow().clone()
    }
}

impl CarContentGateway for DummyContentGenerator {
    fn generate_car_content(&self, car: &CarModel) -> anyhow::Result<GeneratedCarContent> {
        *self.last_request.borrow_mut() = Some(car.clone());
        self.answer
            .clone()
            .ok_or_else(|| anyhow!("content generation failed"))
    }
}
