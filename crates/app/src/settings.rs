//! Application settings loaded from `fintrack.toml` and the environment.
//!
//! Environment variables use the `FINTRACK_` prefix with `__` as the section
//! separator, e.g. `FINTRACK_SERVER__PORT=8080`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

/// Backing store selection.
///
/// In TOML either `database = "memory"` or `database = { sqlite = "./fintrack.db" }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("fintrack").required(false))
            .add_source(Environment::with_prefix("FINTRACK").separator("__"))
            .build()?
            .try_deserialize()
    }
}
