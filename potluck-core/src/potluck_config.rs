//! Global potluck configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{PotluckError, PotluckResult};
use crate::ids::UserId;

static DEFAULT_DATA_FILE: &str = "~/potluck/potluck.toml";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Configuration at ~/.config/potluck/config.toml, overridable with
/// `POTLUCK_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PotluckConfig {
    /// Snapshot file holding events, guests, items and selections.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// The user whose events are listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Default for PotluckConfig {
    fn default() -> Self {
        PotluckConfig {
            data_file: default_data_file(),
            user_id: None,
        }
    }
}

impl PotluckConfig {
    pub fn config_path() -> PotluckResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PotluckError::Config("Could not determine config directory".into()))?
            .join("potluck");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first if
    /// no config file exists yet.
    pub fn load() -> PotluckResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> PotluckResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("POTLUCK"))
            .build()
            .map_err(|e| PotluckError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PotluckError::Config(e.to_string()))
    }

    /// The snapshot path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PotluckResult<()> {
        let contents = format!(
            "\
# potluck configuration

# Where events, guests and items are stored:
# data_file = \"{}\"

# Whose events to show:
# user_id = 1
",
            DEFAULT_DATA_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PotluckError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PotluckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("potluck/config.toml");

        PotluckConfig::create_default_config(&path).unwrap();
        let config = PotluckConfig::load_from(&path).unwrap();

        assert_eq!(config.data_file, default_data_file());
    }

    #[test]
    fn test_load_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = \"/srv/potluck.toml\"\nuser_id = 7\n").unwrap();

        let config = PotluckConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/srv/potluck.toml"));
        assert_eq!(config.user_id, Some(UserId(7)));
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = PotluckConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
