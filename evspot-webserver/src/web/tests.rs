use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result as Fallible;
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::{
    core::{
        entities::MapPoint,
        gateways::{
            content::{CarContentGateway, CarModel, GeneratedCarContent},
            geocode::GeoCodingGateway,
            routing::{Route as DrivingRoute, RoutingGateway},
        },
    },
    web::{sqlite, AuthCfg, Cfg, Gateways},
};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";
    pub const DUMMY_LAT: f64 = 59.91;
    pub const DUMMY_LNG: f64 = 10.75;
    pub const DUMMY_DISTANCE: f64 = 4_200.0;
    pub const DUMMY_CAPACITY_KWH: f64 = 66.0;

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{dummy_gateways, rocket_test_setup};

    pub use crate::{
        core::repositories::*,
        web::{sqlite, Gateways},
    };
}

use self::prelude::*;

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
    gateways: Gateways,
    static_dir: Option<PathBuf>,
) -> (Client, sqlite::Connections) {
    let connections = evspot_db_sqlite::Connections::init(":memory:", 1).unwrap();
    evspot_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    let db = sqlite::Connections::from(connections);
    let upload_dir = tempfile::tempdir().unwrap();
    let cfg = Cfg {
        static_dir,
        upload_dir: upload_dir.path().to_owned(),
        auth: AuthCfg {
            jwt_secret: Some("test-secret".into()),
            access_token_ttl: Duration::from_secs(600),
            refresh_token_ttl: Duration::from_secs(3600),
        },
    };
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
        version: DUMMY_VERSION,
    };
    // The upload directory lives as long as the instance
    let rocket = super::rocket_instance(options, db.clone(), gateways).manage(upload_dir);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn dummy_gateways() -> Gateways {
    Gateways {
        geocoding: Some(Arc::new(DummyGeoGW)),
        routing: Some(Arc::new(DummyRouter)),
        content: Some(Arc::new(DummyContentGW)),
    }
}

pub struct DummyGeoGW;

impl GeoCodingGateway for DummyGeoGW {
    fn resolve_address_lat_lng(&self, _: &str) -> Option<(f64, f64)> {
        Some((DUMMY_LAT, DUMMY_LNG))
    }
}

pub struct DummyRouter;

impl RoutingGateway for DummyRouter {
    fn driving_route(&self, _: MapPoint, _: MapPoint) -> Fallible<DrivingRoute> {
        Ok(DrivingRoute {
            distance: DUMMY_DISTANCE,
            duration: 300.0,
        })
    }
}

pub struct DummyContentGW;

impl CarContentGateway for DummyContentGW {
    fn generate_car_content(&self, car: &CarModel) -> Fallible<GeneratedCarContent> {
        Ok(GeneratedCarContent {
            battery_capacity_kwh: Some(DUMMY_CAPACITY_KWH),
            description: format!("The {} {} is an electric car.", car.brand, car.model),
        })
    }
}
