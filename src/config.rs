//! Configuration management for the City Explorer gateway
//!
//! Settings are layered from built-in defaults, an optional TOML file,
//! `CITY_EXPLORER__*` environment variables and finally the flat variables
//! (`PORT`, `GEOCODE_API_KEY`, ...) the deployment has always used.

use crate::GatewayError;
use crate::upstream::Upstream;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "CITY_EXPLORER_CONFIG";

/// Flat environment variables mapped onto nested config keys
const LEGACY_ENV_VARS: [(&str, &str); 7] = [
    ("PORT", "server.port"),
    ("GEOCODE_API_KEY", "api_keys.geocode"),
    ("WEATHER_API_KEY", "api_keys.weather"),
    ("MOVIES_API_KEY", "api_keys.movies"),
    ("YELP_API_KEY", "api_keys.yelp"),
    ("TRAILS_API_KEY", "api_keys.trails"),
    ("MEETUP_API_KEY", "api_keys.meetup"),
];

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// One credential per upstream
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
    /// Base URL per upstream
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// API keys, all optional so the server can start with a partial set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeysConfig {
    pub geocode: Option<String>,
    pub weather: Option<String>,
    pub movies: Option<String>,
    pub yelp: Option<String>,
    pub trails: Option<String>,
    pub meetup: Option<String>,
}

/// Upstream base URLs (scheme + host, no trailing slash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_geocode_url")]
    pub geocode: String,
    #[serde(default = "default_weather_url")]
    pub weather: String,
    #[serde(default = "default_movies_url")]
    pub movies: String,
    #[serde(default = "default_yelp_url")]
    pub yelp: String,
    #[serde(default = "default_trails_url")]
    pub trails: String,
    #[serde(default = "default_meetup_url")]
    pub meetup: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_geocode_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_weather_url() -> String {
    "https://api.darksky.net".to_string()
}

fn default_movies_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_yelp_url() -> String {
    "https://api.yelp.com".to_string()
}

fn default_trails_url() -> String {
    "https://www.hikingproject.com".to_string()
}

fn default_meetup_url() -> String {
    "https://api.meetup.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            geocode: default_geocode_url(),
            weather: default_weather_url(),
            movies: default_movies_url(),
            yelp: default_yelp_url(),
            trails: default_trails_url(),
            meetup: default_meetup_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ApiKeysConfig {
    /// Key configured for an upstream; blank values count as missing
    #[must_use]
    pub fn get(&self, upstream: Upstream) -> Option<&str> {
        let key = match upstream {
            Upstream::Geocode => &self.geocode,
            Upstream::Weather => &self.weather,
            Upstream::Movies => &self.movies,
            Upstream::Yelp => &self.yelp,
            Upstream::Trails => &self.trails,
            Upstream::Meetup => &self.meetup,
        };
        key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    /// Upstreams that have no usable key
    #[must_use]
    pub fn missing(&self) -> Vec<Upstream> {
        Upstream::ALL
            .into_iter()
            .filter(|u| self.get(*u).is_none())
            .collect()
    }
}

impl UpstreamConfig {
    /// Base URL for an upstream without trailing slashes
    #[must_use]
    pub fn base_url(&self, upstream: Upstream) -> &str {
        let url = match upstream {
            Upstream::Geocode => &self.geocode,
            Upstream::Weather => &self.weather,
            Upstream::Movies => &self.movies,
            Upstream::Yelp => &self.yelp,
            Upstream::Trails => &self.trails,
            Upstream::Meetup => &self.meetup,
        };
        url.trim_end_matches('/')
    }
}

impl GatewayConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_from_path(path)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("CITY_EXPLORER")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in LEGACY_ENV_VARS {
            builder = builder
                .set_override_option(key, env::var(var).ok())
                .with_context(|| format!("Failed to apply {var}"))?;
        }

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: GatewayConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::config("Server port must be non-zero").into());
        }

        for upstream in Upstream::ALL {
            let url = self.upstream.base_url(upstream);
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GatewayError::config(format!(
                    "Base URL for {upstream} must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GatewayError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GatewayError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
