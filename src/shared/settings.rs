use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use ts_rs::TS;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::ConverterMode;

pub const DEFAULT_DECIMAL_PLACES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppSettings {
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPreferences {
    /// ISO 639 language code for labels
    pub language: String,
    pub default_mode: ConverterMode,
    #[ts(type = "number")]
    pub decimal_places: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences {
                language: "en".to_string(),
                default_mode: ConverterMode::Distance,
                decimal_places: DEFAULT_DECIMAL_PLACES,
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "unit-converter", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory
    pub fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path)
    }

    /// Load from `path`, writing defaults there first if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "settings file missing, writing defaults");
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content)
            .map_err(|e| AppError::Config(format!("Failed to write settings file: {}", e)))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
