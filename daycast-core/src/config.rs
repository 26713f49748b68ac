use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// The fixed observation point, the archive day, and the two upstream
/// endpoints. Compiled-in defaults cover the normal case; a config file can
/// override any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub latitude: f64,
    pub longitude: f64,

    /// The single day every snapshot is built against.
    pub archive_day: NaiveDate,

    /// Base URL of the hourly-archive endpoint.
    pub archive_url: String,

    /// URL of the radar maps feed.
    pub radar_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Tokyo
            latitude: 35.6895,
            longitude: 139.6917,
            archive_day: NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid calendar date"),
            archive_url: "https://archive-api.open-meteo.com/v1/archive".to_string(),
            radar_url: "https://api.rainviewer.com/public/weather-maps.json".to_string(),
        }
    }
}

impl Settings {
    /// Exclusive end of the one-day archive range.
    pub fn end_date(&self) -> NaiveDate {
        self.archive_day.succ_opt().unwrap_or(self.archive_day)
    }

    /// Load settings from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "daycast", "daycast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
