//! Configuration model loaded from external sources.

use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers and binaries.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob passed to Tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// Cookie signing key; must be at least 64 bytes.
    pub secret: String,
}

impl ServerConfig {
    /// Layers `config/default`, the optional `config/{APP_ENV}` file and
    /// `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
