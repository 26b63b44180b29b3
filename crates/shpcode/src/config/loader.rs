use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::ConfigError;

/// Overrides `database_path`.
pub const ENV_DATABASE: &str = "SHPCODE_DATABASE";
/// Overrides `export_directory`.
pub const ENV_EXPORT_DIR: &str = "SHPCODE_EXPORT_DIR";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Applies `SHPCODE_*` environment variables on top of `config`. Empty
/// values are ignored.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Some(path) = env_path(ENV_DATABASE) {
        log::debug!("{} overrides database_path", ENV_DATABASE);
        config.database_path = Some(path);
    }
    if let Some(path) = env_path(ENV_EXPORT_DIR) {
        log::debug!("{} overrides export_directory", ENV_EXPORT_DIR);
        config.export_directory = path;
    }
    config
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config.display_offset()?;

    if config.export_directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            message: "export_directory must not be empty".to_string(),
        });
    }

    if let Some(path) = &config.database_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                message: "database_path must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
