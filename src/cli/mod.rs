//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands plus
//! the shared password-prompting and vault-construction helpers.

pub mod code;
pub mod import;
pub mod list;
pub mod status;

use oathstore_core::config::{ensure_data_dir, StorePaths};
use oathstore_core::crypto::vault::Vault;
use oathstore_core::error::{ConfigError, OathstoreError};
use oathstore_core::types::MasterPassword;
use std::io::Write;

/// Open the vault over the default application data directory
pub(crate) fn default_vault() -> Result<Vault, OathstoreError> {
    let data_dir = ensure_data_dir()?;
    Ok(Vault::new(StorePaths::in_dir(&data_dir)))
}

/// Prompt for the store password without echoing it
///
/// Prompts go to stderr so stdout stays machine-parsable.
pub(crate) fn prompt_password(confirm: bool) -> Result<MasterPassword, OathstoreError> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let password = rpassword::read_password()?;

    if confirm {
        eprint!("Confirm password: ");
        std::io::stderr().flush()?;
        let again = rpassword::read_password()?;

        if password != again {
            return Err(OathstoreError::Config(ConfigError::ValidationError {
                message: "passwords do not match".to_string(),
            }));
        }
    }

    Ok(MasterPassword::new(password))
}
