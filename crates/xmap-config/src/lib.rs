//! # xmap-config
//!
//! Layered configuration loading for xmap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`XMAP_*` prefix, `__` as separator)
//! 2. Project-level `.xmap/config.toml`
//! 3. User-level `~/.config/xmap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `XMAP_SHOW__FOLDER` -> `show.folder`,
//! `XMAP_OUTPUT__FOLDER` -> `output.folder`. The `__` (double
//! underscore) separates nested config sections.
//!
//! The show folder setting stands in for the host tool's last-used
//! directory lookup: point it at the folder holding
//! `xlights_rgbeffects.xml` once, and every run picks it up.

mod error;
mod output;
mod show;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use show::ShowConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct XmapConfig {
    #[serde(default)]
    pub show: ShowConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl XmapConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`XmapConfig::load_with_dotenv`]
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or
    /// extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (best effort) before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or
    /// extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add
    /// additional providers on top.
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
        let local_path = PathBuf::from(".xmap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("XMAP_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("xmap").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = XmapConfig::default();
        assert!(!config.show.is_configured());
        assert!(!config.output.is_configured());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = XmapConfig::figment();
        let config: XmapConfig = figment.extract().expect("should extract defaults");
        assert!(config.show.folder.is_empty());
        assert!(config.output.folder.is_empty());
    }
}
