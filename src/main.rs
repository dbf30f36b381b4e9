//! oathstore - one-time password codes from an encrypted local store
//!
//! A command-line tool that keeps TOTP/HOTP secrets in a
//! password-encrypted store on disk and generates codes on demand.

use clap::{Parser, Subcommand};
use oathstore_core::{error::OathstoreError, init_logging};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "oathstore")]
#[command(about = "TOTP/HOTP codes from a password-encrypted secret store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a plaintext secrets document into the store
    Import {
        /// Path to the INI-style plaintext document
        file: PathBuf,
    },
    /// Generate the current code for an account
    Code {
        /// Account name (a section header in the imported document)
        account: String,
        /// Generate for an explicit HOTP counter instead of the clock
        #[arg(long)]
        counter: Option<u64>,
    },
    /// List the account names in the store
    List,
    /// Show store location and initialization state
    Status,
}

fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { file } => cli::import::run_import(&file),
        Commands::Code { account, counter } => cli::code::run_code(&account, counter),
        Commands::List => cli::list::run_list(),
        Commands::Status => cli::status::run_status(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and document problems (exit code 2)
                OathstoreError::Config(_)
                | OathstoreError::Toml(_)
                | OathstoreError::TomlSerialize(_)
                | OathstoreError::Otp(_)
                | OathstoreError::Store(_) => 2,
                // Runtime failures: bad password, missing store, I/O (exit code 1)
                OathstoreError::Crypto(_) | OathstoreError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
