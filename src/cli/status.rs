//! Status command implementation
//!
//! Reports the store location and initialization state. Requires no
//! password: nothing sensitive is read.

use colored::{ColoredString, Colorize};
use oathstore_core::config::{get_data_dir, StorePaths};
use oathstore_core::crypto::vault::Vault;
use oathstore_core::error::OathstoreError;

/// Run the status command
pub fn run_status() -> Result<(), OathstoreError> {
    let data_dir = get_data_dir()?;
    let vault = Vault::new(StorePaths::in_dir(&data_dir));

    println!("Data directory: {}", data_dir.display());
    println!(
        "Salt file:      {} ({})",
        vault.salt_path().display(),
        presence(vault.salt_path().exists())
    );
    println!(
        "Secret store:   {} ({})",
        vault.store_path().display(),
        presence(vault.store_path().exists())
    );
    println!();

    if vault.is_initialized() {
        println!("{}", "Store is initialized.".green());
    } else {
        println!(
            "{}",
            "Store is not initialized. Run `oathstore import <file>` first.".yellow()
        );
    }

    Ok(())
}

fn presence(exists: bool) -> ColoredString {
    if exists {
        "present".green()
    } else {
        "missing".red()
    }
}
