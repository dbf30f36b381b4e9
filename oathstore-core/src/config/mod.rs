//! Configuration module
//!
//! Storage-path injection for the crypto components, application data
//! directory resolution, and the optional TOML application config.

use crate::error::{ConfigError, Result};
use crate::oath::generator::DEFAULT_DIGITS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod toml_config;

/// Salt file name inside the data directory
pub const SALT_FILE_NAME: &str = "salt";

/// Encrypted store file name inside the data directory
pub const STORE_FILE_NAME: &str = "data.pbcrypt";

/// Locations of the persisted salt and the encrypted store
///
/// Always injected into `Vault` construction rather than resolved
/// globally, so the crypto components stay testable against temporary
/// directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub salt_path: PathBuf,
    pub store_path: PathBuf,
}

impl StorePaths {
    pub fn new(salt_path: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            salt_path: salt_path.into(),
            store_path: store_path.into(),
        }
    }

    /// Both files under one application data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            salt_path: dir.join(SALT_FILE_NAME),
            store_path: dir.join(STORE_FILE_NAME),
        }
    }
}

/// Get the application data directory
///
/// Returns the OATHSTORE_DATA_DIR environment variable if set, else
/// $XDG_DATA_HOME/oathstore, else ~/.local/share/oathstore
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("OATHSTORE_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("oathstore"));
        }
    }

    let home = std::env::var("HOME").map_err(|_| ConfigError::IoError {
        message: "HOME environment variable not set".to_string(),
    })?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("oathstore"))
}

/// Ensure the application data directory exists and return it
pub fn ensure_data_dir() -> Result<PathBuf> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir).map_err(|e| ConfigError::IoError {
        message: format!("failed to create data directory: {}", e),
    })?;
    Ok(data_dir)
}

/// Application configuration structure
///
/// Only non-sensitive presentation settings live here; secrets are in
/// the encrypted store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Code width used for every account (default: 6)
    #[serde(default = "default_digits")]
    pub digits: u32,
}

fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(1..=9).contains(&self.digits) {
            return Err(format!(
                "digits must be between 1 and 9, got {}",
                self.digits
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            digits: default_digits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_paths_in_dir() {
        let paths = StorePaths::in_dir(Path::new("/tmp/app"));
        assert_eq!(paths.salt_path, Path::new("/tmp/app/salt"));
        assert_eq!(paths.store_path, Path::new("/tmp/app/data.pbcrypt"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.digits, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_digit_widths_rejected() {
        for digits in [0, 10] {
            let config = AppConfig { digits };
            assert!(config.validate().is_err());
        }
    }
}
