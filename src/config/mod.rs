use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "evspot.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub geocoding: Option<GeocodingGateway>,
    pub routing: Option<RoutingGateway>,
    pub content_generation: Option<ContentGenerationGateway>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub static_dir: Option<PathBuf>,
    /// Pictures of users and stations are stored here.
    pub upload_dir: PathBuf,
}

pub struct Auth {
    pub jwt_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

pub enum GeocodingGateway {
    OpenCage { api_key: Option<String> },
}

pub enum RoutingGateway {
    Osrm { base_url: Option<String> },
}

pub enum ContentGenerationGateway {
    Gemini {
        api_key: String,
        model: Option<String>,
    },
}

fn missing_gateway_cfg(name: &str) -> anyhow::Error {
    anyhow!("Missing '{name}' gateway configuration")
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            geocoding,
            routing,
            content_generation,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            static_dir,
            upload_dir,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            static_dir,
            upload_dir,
        };

        let raw::Auth {
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
        } = auth.unwrap_or_default();
        if access_token_ttl >= refresh_token_ttl {
            log::warn!("Access tokens live as long as refresh tokens");
        }
        let auth = Auth {
            jwt_secret: jwt_secret.filter(|s| !s.trim().is_empty()),
            access_token_ttl,
            refresh_token_ttl,
        };

        let gateway = gateway.unwrap_or_default();

        let geocoding = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway
                    .opencage
                    .ok_or_else(|| missing_gateway_cfg("opencage"))?;
                Some(GeocodingGateway::OpenCage { api_key })
            }
            None => None,
        };

        let routing = match routing.and_then(|r| r.gateway) {
            // OSRM has a public demo server, so its section is optional
            Some(raw::RoutingGateway::Osrm) => {
                let base_url = gateway.osrm.and_then(|osrm| osrm.base_url);
                Some(RoutingGateway::Osrm { base_url })
            }
            None => None,
        };

        let content_generation = match content_generation.and_then(|c| c.gateway) {
            Some(raw::ContentGenerationGateway::Gemini) => {
                let raw::Gemini { api_key, model } = gateway
                    .gemini
                    .ok_or_else(|| missing_gateway_cfg("gemini"))?;
                match api_key.filter(|key| !key.trim().is_empty()) {
                    Some(api_key) => Some(ContentGenerationGateway::Gemini { api_key, model }),
                    None => {
                        log::warn!("No Gemini API key configured: car profiles cannot be generated");
                        None
                    }
                }
            }
            None => None,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            geocoding,
            routing,
            content_generation,
        })
    }
}
