//! Code command implementation
//!
//! Decrypts the store and prints one account's code to stdout for
//! machine-parsable usage. Errors and prompts go to stderr. No
//! additional formatting or text.

use oathstore_core::config::toml_config;
use oathstore_core::error::OathstoreError;
use oathstore_core::store::SecretStore;

/// Run the code command
pub fn run_code(account: &str, counter: Option<u64>) -> Result<(), OathstoreError> {
    let config = toml_config::load_config()?;
    let vault = crate::cli::default_vault()?;

    let password = crate::cli::prompt_password(false)?;
    let text = vault.open_store(&password)?;

    let mut store = SecretStore::with_digits(config.digits);
    store.load(&text)?;

    let code = match counter {
        Some(counter) => store.generate_code_at(account, counter),
        None => store.generate_code(account)?,
    };

    match code {
        Some(code) => {
            println!("{}", code.expose());
            Ok(())
        }
        None => {
            eprintln!("No account named `{}` in the store", account);
            std::process::exit(1);
        }
    }
}
