//! User configuration file handling
//!
//! Manages settings from ~/.config/showdist/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::settings::{WidgetFrame, WidgetOffset};
use crate::core::errors::{FileContext, ShowDistResult};

/// User configuration from ~/.config/showdist/settings.json
///
/// Every field is optional and overrides the built-in default when set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_frame: Option<WidgetFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rulers_shift: Option<WidgetOffset>,
    /// `EnvFilter` directive, e.g. "showdist=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_to_file: Option<bool>,
}

impl ConfigFile {
    /// Get the path to the showdist config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("showdist")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; missing or broken files yield `None`
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
                    warn!("Failed to parse {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> ShowDistResult<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> ShowDistResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context("create", parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_file_context("write", path)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }
}
