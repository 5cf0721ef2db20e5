//! Announcer configuration
//!
//! This module re-exports shared types from cgmistake-types and provides
//! persistence for AnnouncerConfig.

use std::path::{Path, PathBuf};

use tracing::warn;

pub use cgmistake_types::{AnnouncerConfig, ChatChannel, MistakeCategory, PendingAttackPolicy};

use super::ConfigError;

const APP_NAME: &str = "cgmistake";
const CONFIG_NAME: &str = "config";

/// Extension trait for AnnouncerConfig persistence
pub trait AnnouncerConfigExt: Sized {
    /// Load the stored config, falling back to defaults if it can't be read
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    /// Load an explicit TOML file (missing fields take their defaults)
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Result<PathBuf, ConfigError>;
}

impl AnnouncerConfigExt for AnnouncerConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            warn!(error = %err, "using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_reads_partial_file() {
        let path = std::env::temp_dir().join(format!("cgmistake-config-{}.toml", std::process::id()));
        std::fs::write(&path, "send_to_chat = true\ntrack_tornadoes = false\n").unwrap();

        let config = AnnouncerConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(config.send_to_chat);
        assert!(!config.track_tornadoes);
        assert!(config.track_floor_damage);
    }

    #[test]
    fn load_from_reports_missing_file() {
        let err = AnnouncerConfig::load_from(Path::new("/nonexistent/cgmistake.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let path = std::env::temp_dir().join(format!("cgmistake-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "send_to_chat = \"maybe\"\n").unwrap();

        let err = AnnouncerConfig::load_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }
}
