//! List command implementation
//!
//! Decrypts the store and prints the account names, one per line.

use oathstore_core::error::OathstoreError;
use oathstore_core::store::SecretStore;

/// Run the list command
pub fn run_list() -> Result<(), OathstoreError> {
    let vault = crate::cli::default_vault()?;
    let password = crate::cli::prompt_password(false)?;
    let text = vault.open_store(&password)?;

    let mut store = SecretStore::new();
    store.load(&text)?;

    if store.is_empty() {
        println!("The store is empty.");
        return Ok(());
    }

    for name in store.names() {
        println!("{}", name);
    }

    Ok(())
}
