use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assessment::ScoringConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut scoring = ScoringConfig::default();
        if let Some(rating) = rating_var("ARZA_INTERMEDIATE_RATING")? {
            scoring.intermediate_rating = rating;
        }
        if let Some(rating) = rating_var("ARZA_ELITE_RATING")? {
            scoring.elite_rating = rating;
        }
        if scoring.intermediate_rating >= scoring.elite_rating {
            return Err(ConfigError::RatingOrder {
                intermediate: scoring.intermediate_rating,
                elite: scoring.elite_rating,
            });
        }

        let directory = env::var("ARZA_CATALOG_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring,
            catalog: CatalogConfig { directory },
        })
    }
}

fn rating_var(name: &'static str) -> Result<Option<u8>, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };

    match raw.trim().parse::<u8>() {
        Ok(rating) if rating <= 99 => Ok(Some(rating)),
        _ => Err(ConfigError::InvalidRating { name }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where routine templates and exercises are read from; `None` uses the built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub directory: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRating { name: &'static str },
    RatingOrder { intermediate: u8, elite: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRating { name } => {
                write!(f, "{name} must be an integer between 0 and 99")
            }
            ConfigError::RatingOrder {
                intermediate,
                elite,
            } => write!(
                f,
                "intermediate rating {intermediate} must be below elite rating {elite}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRating { .. }
            | ConfigError::RatingOrder { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("ARZA_INTERMEDIATE_RATING");
        env::remove_var("ARZA_ELITE_RATING");
        env::remove_var("ARZA_CATALOG_DIR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring, ScoringConfig::default());
        assert!(config.catalog.directory.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rating_overrides_are_applied() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ARZA_INTERMEDIATE_RATING", "40");
        env::set_var("ARZA_ELITE_RATING", "80");
        env::set_var("ARZA_CATALOG_DIR", "/srv/arza/catalog");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.intermediate_rating, 40);
        assert_eq!(config.scoring.elite_rating, 80);
        assert_eq!(
            config.catalog.directory,
            Some(PathBuf::from("/srv/arza/catalog"))
        );
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_or_inverted_ratings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ARZA_ELITE_RATING", "120");
        match AppConfig::load() {
            Err(ConfigError::InvalidRating { name }) => assert_eq!(name, "ARZA_ELITE_RATING"),
            other => panic!("expected invalid rating, got {other:?}"),
        }

        env::set_var("ARZA_ELITE_RATING", "30");
        match AppConfig::load() {
            Err(ConfigError::RatingOrder { intermediate, elite }) => {
                assert_eq!((intermediate, elite), (35, 30));
            }
            other => panic!("expected rating order error, got {other:?}"),
        }
        reset_env();
    }
}
