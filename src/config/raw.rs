use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("evspot.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub auth: Option<Auth>,
    pub geocoding: Option<Geocoding>,
    pub routing: Option<Routing>,
    pub content_generation: Option<ContentGeneration>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub static_dir: Option<PathBuf>,
    pub upload_dir: PathBuf,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    pub jwt_secret: Option<String>,
    #[serde(deserialize_with = "deserialize_duration")]
    pub access_token_ttl: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub refresh_token_ttl: Duration,
}

impl Default for Auth {
    fn default() -> Self {
        Config::default().auth.expect("Auth configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Routing {
    pub gateway: Option<RoutingGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingGateway {
    Osrm,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContentGeneration {
    pub gateway: Option<ContentGenerationGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentGenerationGateway {
    Gemini,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub opencage: Option<OpenCage>,
    pub osrm: Option<Osrm>,
    pub gemini: Option<Gemini>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Osrm {
    pub base_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gemini {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.auth.is_some());
        assert!(cfg.geocoding.unwrap().gateway.is_none());
        assert!(cfg.routing.unwrap().gateway.is_none());
        assert!(cfg.content_generation.unwrap().gateway.is_none());
    }

    #[test]
    fn default_auth_config() {
        let cfg = Auth::default();
        assert!(cfg.jwt_secret.is_none());
        assert_eq!(cfg.access_token_ttl, Duration::from_secs(60 * 60));
        assert_eq!(cfg.refresh_token_ttl, Duration::from_secs(30 * 24 * 60 * 60));
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/evspot.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let gateway = cfg.gateway.unwrap();
        assert!(gateway.opencage.is_some());
        assert!(gateway.osrm.is_some());
        assert_eq!(
            gateway.gemini.and_then(|g| g.model).as_deref(),
            Some("gemini-1.5-flash")
        );
    }
}
