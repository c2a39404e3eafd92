pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, comment_builder::*, station_builder::*, user_builder::*};

pub mod station_builder {

    use super::*;
    use crate::{geo::*, id::*, reaction::*, station::*};

    #[derive(Debug)]
    pub struct StationBuild {
        station: ChargingStation,
    }

    impl StationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.station.id = id.into();
            self
        }
        pub fn kind(mut self, kind: ChargerKind) -> Self {
            self.station.kind = kind;
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.station.location = Some(location.into());
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.station.pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            self
        }
        pub fn price(mut self, price: f64) -> Self {
            self.station.price = price;
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.station.rating = rating;
            self
        }
        pub fn charging_rate(mut self, rate: f64) -> Self {
            self.station.charging_rate = rate;
            self
        }
        pub fn owner(mut self, owner: &Id) -> Self {
            self.station.owner = Some(owner.clone());
            self
        }
        pub fn reactions(mut self, reactions: Reactions) -> Self {
            self.station.reactions = reactions;
            self
        }
        pub fn finish(self) -> ChargingStation {
            self.station
        }
    }

    impl Builder for ChargingStation {
        type Build = StationBuild;
        fn build() -> StationBuild {
            StationBuild {
                station: ChargingStation {
                    id: Id::new(),
                    kind: ChargerKind::Standard,
                    location: None,
                    pos: None,
                    price: 0.0,
                    rating: 0.0,
                    charging_rate: 0.0,
                    picture: None,
                    description: None,
                    owner: None,
                    reactions: Reactions::default(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn station(mut self, station_id: &Id) -> Self {
            self.comment.station_id = station_id.clone();
            self
        }
        pub fn author(mut self, author: &Id) -> Self {
            self.comment.author = Some(author.clone());
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.comment.rating = CommentRating::try_new(rating.into());
            self
        }
        pub fn created_at(mut self, ts: Timestamp) -> Self {
            self.comment.created_at = ts;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    station_id: Id::new(),
                    author: None,
                    text: "".into(),
                    rating: None,
                    created_at: Timestamp::now(),
                    reactions: Default::default(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, station::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn kind(mut self, kind: ChargerKind) -> Self {
            self.booking.kind = kind;
            self
        }
        pub fn station(mut self, station_id: &Id) -> Self {
            self.booking.station_id = station_id.clone();
            self
        }
        pub fn booked_by(mut self, user_id: &Id) -> Self {
            self.booking.booked_by = Some(user_id.clone());
            self
        }
        pub fn status(mut self, status: &str) -> Self {
            if let Some(status) = BookingStatus::try_new(status) {
                self.booking.status = status;
            }
            self
        }
        pub fn vehicle(mut self, vehicle: VehicleDetails) -> Self {
            self.booking.vehicle = vehicle;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    kind: ChargerKind::Standard,
                    station_id: Id::new(),
                    booked_by: None,
                    created_at: Timestamp::now(),
                    date: None,
                    start_time: None,
                    end_time: None,
                    message: None,
                    contact_number: None,
                    status: BookingStatus::default(),
                    vehicle: VehicleDetails::default(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            if let Ok(password) = password.parse() {
                self.user.password = password;
            }
            self
        }
        pub fn first_name(mut self, name: &str) -> Self {
            self.user.first_name = Some(name.into());
            self
        }
        pub fn refresh_tokens(mut self, tokens: Vec<String>) -> Self {
            self.user.refresh_tokens = tokens;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    first_name: None,
                    last_name: None,
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    password: Password::from_hash(String::new()),
                    phone_number: None,
                    picture: None,
                    refresh_tokens: vec![],
                },
            }
        }
    }
}
