use std::path::PathBuf;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::db::default_database_path;
use crate::display::{offset_from_minutes, DEFAULT_UTC_OFFSET_MINUTES};
use crate::error::ConfigError;

/// Inclusive bounds for `utc_offset_minutes` (UTC-12:00 to UTC+14:00).
pub const MIN_UTC_OFFSET_MINUTES: i32 = -720;
pub const MAX_UTC_OFFSET_MINUTES: i32 = 840;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SQLite file. Falls back to `~/.shpcode/data/shpcode.db`.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
    #[serde(default = "default_export_directory")]
    pub export_directory: PathBuf,
    /// Display offset for timestamps, in minutes east of UTC.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            export_directory: default_export_directory(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl Config {
    pub fn resolved_database_path(&self) -> Result<PathBuf, ConfigError> {
        self.database_path
            .clone()
            .or_else(default_database_path)
            .ok_or_else(|| ConfigError::Validation {
                message: "No database_path configured and no home directory found".to_string(),
            })
    }

    pub fn display_offset(&self) -> Result<FixedOffset, ConfigError> {
        if !(MIN_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::Validation {
                message: format!(
                    "utc_offset_minutes must be between {} and {}, got {}",
                    MIN_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES, self.utc_offset_minutes
                ),
            });
        }
        offset_from_minutes(self.utc_offset_minutes).ok_or_else(|| ConfigError::Validation {
            message: format!("Invalid UTC offset: {}", self.utc_offset_minutes),
        })
    }
}
