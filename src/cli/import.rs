//! Import command implementation
//!
//! Reads a plaintext INI-style secrets document, validates it, and
//! encrypts it into the store. On first import the password is asked
//! for twice.

use oathstore_core::config::toml_config;
use oathstore_core::error::OathstoreError;
use oathstore_core::store::SecretStore;
use std::path::Path;
use tracing::debug;

/// Run the import command
pub fn run_import(file: &Path) -> Result<(), OathstoreError> {
    let text = std::fs::read_to_string(file)?;
    debug!("Read {} bytes from {:?}", text.len(), file);

    // Validate before asking for a password: a document that does not
    // parse must never replace the store
    let config = toml_config::load_config()?;
    let mut store = SecretStore::with_digits(config.digits);
    store.load(&text)?;

    let vault = crate::cli::default_vault()?;
    let first_import = !vault.is_initialized();
    let password = crate::cli::prompt_password(first_import)?;

    vault.seal_to_store(&password, &text)?;

    println!(
        "Imported {} account(s) into {}",
        store.len(),
        vault.store_path().display()
    );
    Ok(())
}
