//! User configuration file handling
//!
//! Manages settings from ~/.config/quadpivot/settings.json

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::geometry::TransformMode;

const APP_DIR_NAME: &str = "quadpivot";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// User configuration from ~/.config/quadpivot/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Mode to start in ("move" or "rotate")
    pub default_mode: Option<String>,
    /// Handle pick distance in world units
    pub pick_radius: Option<f64>,
}

impl ConfigFile {
    /// Get the path to the quadpivot config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_DIR_NAME)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE_NAME)
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; missing or malformed files yield `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", SETTINGS_FILE_NAME, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", SETTINGS_FILE_NAME, e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The configured start mode, if present and recognised
    pub fn transform_mode(&self) -> Option<TransformMode> {
        let name = self.default_mode.as_deref()?;
        let mode = TransformMode::parse(name);
        if mode.is_none() {
            warn!("Unknown default_mode '{}' in {}", name, SETTINGS_FILE_NAME);
        }
        mode
    }

    /// Initialize the user configuration directory
    ///
    /// This creates ~/.config/quadpivot with a settings.json holding the
    /// defaults and a logs/ directory for application logs.
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_config_directory_at(&Self::config_dir())
    }

    pub fn initialize_config_directory_at(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        if !settings_path.exists() {
            let defaults = ConfigFile {
                default_mode: Some(TransformMode::default().as_str().to_string()),
                pick_radius: Some(super::settings::DEFAULT_PICK_RADIUS),
            };
            defaults.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE_NAME);
        let config = ConfigFile {
            default_mode: Some("rotate".to_string()),
            pick_radius: Some(12.5),
        };
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.transform_mode(), Some(TransformMode::Rotate));
    }

    #[test]
    fn test_missing_and_malformed_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        assert!(ConfigFile::load_from(&path).is_none());

        fs::write(&path, "{ not json").unwrap();
        assert!(ConfigFile::load_from(&path).is_none());
    }

    #[test]
    fn test_partial_file_leaves_fields_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "default_mode": "spin" }"#).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.pick_radius, None);
        assert_eq!(loaded.transform_mode(), None);
    }

    #[test]
    fn test_initialize_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        ConfigFile::initialize_config_directory_at(dir.path()).unwrap();
        assert!(dir.path().join("logs").is_dir());

        let path = dir.path().join(SETTINGS_FILE_NAME);
        let defaults = ConfigFile::load_from(&path).unwrap();
        assert_eq!(defaults.transform_mode(), Some(TransformMode::Move));

        let custom = ConfigFile {
            default_mode: Some("rotate".to_string()),
            pick_radius: None,
        };
        custom.save_to(&path).unwrap();
        ConfigFile::initialize_config_directory_at(dir.path()).unwrap();
        assert_eq!(ConfigFile::load_from(&path), Some(custom));
    }
}
