//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gardenkit/gardenkit.toml`
//! 3. Explicit config file passed via `--config`
//! 4. Environment variables: `GARDENKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, GardenManager};

/// Unified configuration for gardenkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Owner names used when building a network without explicit names
    pub network: Vec<String>,
    /// Days simulated by growth commands
    pub growth_days: u32,
    /// Colored terminal output
    pub color: bool,
    /// Gardening tip printed by `gardenkit tip`
    pub tip: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network: vec!["Alice".into(), "Bob".into()],
            growth_days: 1,
            color: true,
            tip: GardenManager::utility_garden_tip().to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub network: Option<Vec<String>>,
    pub growth_days: Option<u32>,
    pub color: Option<bool>,
    pub tip: Option<String>,
}

/// Get the XDG config directory for gardenkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gardenkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gardenkit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            network: overlay
                .network
                .clone()
                .unwrap_or_else(|| self.network.clone()),
            growth_days: overlay.growth_days.unwrap_or(self.growth_days),
            color: overlay.color.unwrap_or(self.color),
            tip: overlay.tip.clone().unwrap_or_else(|| self.tip.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist if given
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("Loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply GARDENKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("GARDENKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("network")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get::<Vec<String>>("network") {
            settings.network = val;
        }
        if let Ok(val) = config.get_int("growth_days") {
            settings.growth_days = u32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("growth_days out of range: {}", val),
            })?;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_string("tip") {
            settings.tip = val;
        }

        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.network, vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(settings.growth_days, 1);
        assert!(settings.color);
    }

    #[test]
    fn test_merge_with_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            growth_days: Some(7),
            ..RawSettings::default()
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.growth_days, 7);
        assert_eq!(result.network, base.network);
        assert_eq!(result.tip, base.tip);
    }

    #[test]
    fn test_merge_with_replaces_network() {
        let base = Settings::default();
        let overlay = RawSettings {
            network: Some(vec!["Carol".to_string()]),
            ..RawSettings::default()
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.network, vec!["Carol".to_string()]);
    }

    #[test]
    fn test_to_toml_roundtrips_through_raw() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }
}
