//! # census-config
//!
//! Layered configuration loading for the census income service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CENSUS_*` prefix, `__` as separator)
//! 2. Project-level `./census.toml`
//! 3. User-level `~/.config/census/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CENSUS_DATABASE__PATH` -> `database.path`,
//! `CENSUS_SERVER__BIND` -> `server.bind`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use census_config::CensusConfig;
//!
//! let config = CensusConfig::load_with_dotenv().expect("config");
//! println!("serving {} on {}", config.database.path, config.server.bind);
//! ```

mod database;
mod error;
mod report;
mod server;

pub use database::{DatabaseConfig, UpsertStrategy};
pub use error::ConfigError;
pub use report::ReportConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file, looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "census.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CensusConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl CensusConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if present) before building
    /// the figment. This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CENSUS_").split("__"))
    }

    /// Reject values that deserialize fine but cannot be served.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.default_limit < 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.default_limit".into(),
                reason: "must be non-negative".into(),
            });
        }
        if self.report.age_bins == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.age_bins".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.database.path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("census").join("config.toml"))
    }
}
