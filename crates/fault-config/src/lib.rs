//! # fault-config
//!
//! Layered configuration loading for Faultline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FAULTLINE_*` prefix, `__` as separator)
//! 2. Project-level `.faultline/config.toml`
//! 3. User-level `~/.config/faultline/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `FAULTLINE_DECODE__STRICT_DETAILS` -> `decode.strict_details`,
//! `FAULTLINE_LOG__FILTER` -> `log.filter`.
//!
//! ```no_run
//! use fault_config::FaultConfig;
//!
//! let config = FaultConfig::load_with_dotenv().expect("config");
//! let registry = fault_errors::DispatchRegistry::with_options(config.decode.clone());
//! ```

mod error;
mod log;

pub use error::ConfigError;
pub use fault_errors::DecodeOptions;
pub use log::LogConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FaultConfig {
    #[serde(default)]
    pub decode: DecodeOptions,
    #[serde(default)]
    pub log: LogConfig,
}

impl FaultConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`FaultConfig::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse, or
    /// `ConfigError::InvalidValue` if the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`FaultConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit config file layered above the default files.
    ///
    /// Environment variables still win over the file.
    ///
    /// # Errors
    ///
    /// Same as [`FaultConfig::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Self::env_layer());
        Self::from_figment(&figment)
    }

    /// [`FaultConfig::load_from`] with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`FaultConfig::load`].
    pub fn load_from_with_dotenv(path: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(path)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_layers().merge(Self::env_layer())
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Same as [`FaultConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log.filter".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".faultline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// `FAULTLINE_LOG` is the tracing filter read by the binary, not a config key.
    fn env_layer() -> Env {
        Env::prefixed("FAULTLINE_").ignore(&["log"]).split("__")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("faultline").join("config.toml"))
    }
}
