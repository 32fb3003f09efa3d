//! # stock-config
//!
//! Layered configuration loading for Stockpile using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STOCKPILE_*` prefix, `__` as separator)
//! 2. Project-level `.stockpile/config.toml`
//! 3. User-level `~/.config/stockpile/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STOCKPILE_API__BASE_URL` -> `api.base_url`,
//! `STOCKPILE_UI__PAGE_SIZE` -> `ui.page_size`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use stock_config::StockConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = StockConfig::load_with_dotenv().expect("config");
//!
//! println!("API at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod ui;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use ui::UiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StockConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl StockConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`StockConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when extraction fails (e.g. a
    /// non-numeric `STOCKPILE_UI__PAGE_SIZE`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".stockpile/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("STOCKPILE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stockpile").join("config.toml"))
    }

    /// Reject values no command could work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty base URL or a zero
    /// page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.ui.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = StockConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.ui.page_size, 20);
        assert_eq!(config.ui.alert_poll_secs, 30);
        assert_eq!(config.ui.search_debounce_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let mut config = StockConfig::default();
        config.ui.page_size = 0;
        let err = config.validate().expect_err("should reject");
        assert!(err.to_string().contains("ui.page_size"));
    }
}
