use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use evspot_gateways::{gemini::Gemini, opencage::OpenCage, osrm::Osrm};
use evspot_webserver::{AuthCfg, Cfg, Gateways};

use crate::config::{self, Config};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    let Config {
        db,
        webserver,
        auth,
        geocoding,
        routing,
        content_generation,
    } = cfg;

    log::info!("Connecting to SQLite database {}", db.conn_sqlite);
    let connections = evspot_db_sqlite::Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    evspot_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let gateways = gateways(geocoding, routing, content_generation);

    let config::WebServer {
        enable_cors,
        static_dir,
        upload_dir,
    } = webserver;
    let config::Auth {
        jwt_secret,
        access_token_ttl,
        refresh_token_ttl,
    } = auth;
    let web_cfg = Cfg {
        static_dir,
        upload_dir,
        auth: AuthCfg {
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
        },
    };
    evspot_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        gateways,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}

fn gateways(
    geocoding: Option<config::GeocodingGateway>,
    routing: Option<config::RoutingGateway>,
    content_generation: Option<config::ContentGenerationGateway>,
) -> Gateways {
    let mut gateways = Gateways::default();
    match geocoding {
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            gateways.geocoding = Some(Arc::new(OpenCage::new(api_key)));
        }
        None => log::warn!("No geocoding gateway configured: addresses will not be resolved"),
    }
    match routing {
        Some(config::RoutingGateway::Osrm { base_url }) => {
            log::info!("Use OSRM routing gateway");
            gateways.routing = Some(Arc::new(Osrm::new(base_url)));
        }
        None => log::warn!("No routing gateway configured"),
    }
    match content_generation {
        Some(config::ContentGenerationGateway::Gemini { api_key, model }) => {
            log::info!("Use Gemini content generation gateway");
            gateways.content = Some(Arc::new(Gemini::new(api_key, model)));
        }
        None => log::warn!("No content generation gateway configured"),
    }
    gateways
}
