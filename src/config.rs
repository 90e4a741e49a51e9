use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::core::{DisplayOptions, DistanceUnit};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Locations of the static data files
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_hotels_path")]
    pub hotels_path: PathBuf,
    #[serde(default = "default_restaurants_path")]
    pub restaurants_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            hotels_path: default_hotels_path(),
            restaurants_path: default_restaurants_path(),
        }
    }
}

fn default_hotels_path() -> PathBuf { PathBuf::from("data/hotels.json") }
fn default_restaurants_path() -> PathBuf { PathBuf::from("data/restaurants.json") }

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            distance_unit: DistanceUnit::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String { "¥".to_string() }

impl From<&DisplaySettings> for DisplayOptions {
    fn from(settings: &DisplaySettings) -> Self {
        Self {
            unit: settings.distance_unit,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

fn environment() -> Environment {
    // e.g., RESTAURANT_MAP__SERVER__PORT -> server.port
    Environment::with_prefix("RESTAURANT_MAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESTAURANT_MAP__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::from(&self.display)
    }
}
