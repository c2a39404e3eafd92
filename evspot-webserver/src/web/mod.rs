use std::{path::PathBuf, sync::Arc, time::Duration};

use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::gateways::{
    content::CarContentGateway, geocode::GeoCodingGateway, routing::RoutingGateway,
};

pub mod api;
mod frontend;
mod guards;
pub mod jwt;
pub mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Directory of the browser client (`index.html` and assets).
    pub static_dir: Option<PathBuf>,
    pub upload_dir: PathBuf,
    pub auth: AuthCfg,
}

#[derive(Debug, Clone)]
pub struct AuthCfg {
    pub jwt_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

/// Third party services, each of them optional.
#[derive(Clone, Default)]
pub struct Gateways {
    pub geocoding: Option<Arc<dyn GeoCodingGateway + Send + Sync>>,
    pub routing: Option<Arc<dyn RoutingGateway + Send + Sync>>,
    pub content: Option<Arc<dyn CarContentGateway + Send + Sync>>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways {
        geocoding,
        routing,
        content,
    } = gateways;

    let jwt_state = jwt::JwtState::new(
        cfg.auth.jwt_secret.as_deref(),
        cfg.auth.access_token_ttl,
        cfg.auth.refresh_token_ttl,
    );
    if cfg.static_dir.is_none() {
        info!("No static directory configured: serving the API only");
    }
    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(guards::GeoCoding(geocoding))
        .manage(guards::Routing(routing))
        .manage(guards::ContentGeneration(content))
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
