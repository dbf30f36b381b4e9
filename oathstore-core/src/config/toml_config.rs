//! TOML configuration file I/O
//!
//! Handles loading and saving the application configuration from TOML
//! files in the user's configuration directory.

use crate::config::AppConfig;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the configuration directory
///
/// Returns the OATHSTORE_CONFIG_DIR environment variable if set, else
/// $XDG_CONFIG_HOME/oathstore, else ~/.config/oathstore
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("OATHSTORE_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("oathstore"));
        }
    }

    let home = std::env::var("HOME").map_err(|_| ConfigError::IoError {
        message: "HOME environment variable not set".to_string(),
    })?;

    Ok(PathBuf::from(home).join(".config").join("oathstore"))
}

/// Get the configuration file path
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application configuration
///
/// Falls back to defaults when no configuration file exists.
pub fn load_config() -> Result<AppConfig> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(AppConfig::default());
    }
    load_config_from_path(&config_path)
}

/// Load the application configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        },
        _ => ConfigError::IoError {
            message: format!("failed to read config file: {}", e),
        },
    })?;

    let config: AppConfig = toml::from_str(&contents)?;

    config
        .validate()
        .map_err(|message| ConfigError::ValidationError { message })?;

    Ok(config)
}

/// Save the application configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<()> {
    config
        .validate()
        .map_err(|message| ConfigError::ValidationError { message })?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
            message: format!("failed to create config directory: {}", e),
        })?;
    }

    let contents = toml::to_string_pretty(config)?;

    std::fs::write(&path, contents).map_err(|_| ConfigError::SaveFailed {
        path: path.as_ref().to_string_lossy().to_string(),
    })?;

    Ok(())
}
