pub mod prelude {
    use std::{cell::Cell, sync::mpsc, thread, time::Duration};

    pub use evspot_core::{
        entities::*,
        gateways::{
            content::{CarContentGateway, CarModel, GeneratedCarContent},
            geocode::GeoCodingGateway,
        },
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub fn new_user(email: &str) -> usecases::NewUser {
        usecases::NewUser {
            email: email.into(),
            password: "secret123".into(),
            first_name: None,
            last_name: None,
            phone_number: None,
        }
    }

    #[derive(Default)]
    pub struct DummyGeoCoder {
        lat_lng: Option<(f64, f64)>,
    }

    impl DummyGeoCoder {
        pub fn resolving(lat: f64, lng: f64) -> Self {
            Self {
                lat_lng: Some((lat, lng)),
            }
        }
    }

    impl GeoCodingGateway for DummyGeoCoder {
        fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
            self.lat_lng
        }
    }

    /// Resolves every address to Trondheim and records whether
    /// the database could be written meanwhile.
    pub struct LockCheckingGeoCoder {
        db_connections: sqlite::Connections,
        write_lock_held: Cell<Option<bool>>,
    }

    impl LockCheckingGeoCoder {
        pub fn new(db_connections: &sqlite::Connections) -> Self {
            Self {
                db_connections: db_connections.clone(),
                write_lock_held: Cell::new(None),
            }
        }

        pub fn write_lock_was_held(&self) -> Option<bool> {
            self.write_lock_held.get()
        }
    }

    impl GeoCodingGateway for LockCheckingGeoCoder {
        fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
            let (tx, rx) = mpsc::channel();
            let db_connections = self.db_connections.clone();
            // A blocked writer would wait for the caller forever
            thread::spawn(move || {
                let locked = db_connections.exclusive().is_ok();
                let _ = tx.send(locked);
            });
            let acquired = rx.recv_timeout(Duration::from_secs(5)).unwrap_or(false);
            self.write_lock_held.set(Some(!acquired));
            Some((63.43, 10.39))
        }
    }

    pub struct DummyContentGenerator {
        answer: Option<GeneratedCarContent>,
    }

    impl DummyContentGenerator {
        pub fn answering(battery_capacity_kwh: Option<f64>, description: &str) -> Self {
            Self {
                answer: Some(GeneratedCarContent {
                    battery_capacity_kwh,
                    description: description.into(),
                }),
            }
        }

        pub fn failing() -> Self {
            Self { answer: None }
        }
    }

    impl CarContentGateway for DummyContentGenerator {
        fn generate_car_content(&self, _: &CarModel) -> anyhow::Result<GeneratedCarContent> {
            self.answer
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Service unavailable"))
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            evspot_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn register(&self, email: &str) -> User {
            flows::register_user(&self.db_connections, new_user(email)).unwrap()
        }

        pub fn user(&self, id: &Id) -> User {
            self.db_connections.shared().unwrap().get_user(id).unwrap()
        }

        pub fn station(&self, id: &Id) -> ChargingStation {
            self.db_connections.shared().unwrap().get_station(id).unwrap()
        }

        pub fn create_station(&self, owner: &Id, kind: ChargerKind) -> ChargingStation {
            let new_station = usecases::NewStation {
                kind,
                location: Some("Storgata 1, Oslo".into()),
                lat: Some(59.91),
                lng: Some(10.75),
                price: Some(3.5),
                charging_rate: Some(22.0),
                ..Default::default()
            };
            flows::create_station(
                &self.db_connections,
                None::<&DummyGeoCoder>,
                owner,
                new_station,
            )
            .unwrap()
        }

        pub fn comment(
            &self,
            author: &Id,
            station_id: &Id,
            text: &str,
            rating: Option<i64>,
        ) -> Comment {
            let new_comment = usecases::NewComment {
                text: text.into(),
                rating,
            };
            flows::add_comment(&self.db_connections, author, station_id, new_comment).unwrap()
        }

        pub fn book(&self, booked_by: &Id, station_id: &Id) -> Booking {
            let new_booking = usecases::NewBooking {
                station_id: Some(station_id.clone()),
                date: Some("2024-05-31".into()),
                start_time: Some("10:00".into()),
                end_time: Some("11:30".into()),
                message: Some("Arriving by taxi".into()),
                ..Default::default()
            };
            flows::book_charger(
                &self.db_connections,
                booked_by,
                ChargerKind::Standard,
                new_booking,
            )
            .unwrap()
        }
    }
}
