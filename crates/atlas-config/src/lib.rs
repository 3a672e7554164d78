//! # atlas-config
//!
//! Layered configuration loading for Atlas using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATLAS_*` prefix, `__` as separator)
//! 2. Project-level `./atlas.toml`
//! 3. User-level `~/.config/atlas/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATLAS_JAMF__SERVER` -> `jamf.server`,
//! `ATLAS_OUTPUT__DIR` -> `output.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use atlas_config::AtlasConfig;
//!
//! let config = AtlasConfig::load_with_dotenv().expect("config");
//! config.jamf.validate().expect("jamf settings");
//! println!("server: {}", config.jamf.base_url());
//! ```

mod error;
mod jamf;
mod output;

pub use error::ConfigError;
pub use jamf::JamfConfig;
pub use output::{OutputConfig, SinkFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "atlas.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub jamf: JamfConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AtlasConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ATLAS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atlas").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = AtlasConfig::default();
        assert!(config.jamf.validate().is_err());
        assert_eq!(config.jamf.page_size, 100);
        assert_eq!(config.output.format, SinkFormat::Csv);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AtlasConfig = AtlasConfig::figment().extract()?;
            assert!(config.jamf.validate().is_err());
            assert_eq!(config.output.dir, "atlas-out");
            Ok(())
        });
    }
}
