//! Password-based key derivation
//!
//! PBKDF2-HMAC-SHA256 over a persisted random salt. The salt is created
//! on first use and never modified afterwards; an unusable salt is a
//! hard error because regenerating it would make every previously
//! encrypted store permanently unreadable.

use crate::error::{CryptoError, Result};
use crate::types::{DerivedKey, MasterPassword};
use data_encoding::BASE64URL;
use rand::RngCore;
use sha2::Sha256;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 390_000;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes
pub const KEY_LEN: usize = 32;

/// Derives cipher keys from the master password and a persisted salt
///
/// The salt path is injected at construction so the component stays
/// testable against temporary directories.
pub struct KeyDerivation {
    salt_path: PathBuf,
}

impl KeyDerivation {
    pub fn new(salt_path: impl Into<PathBuf>) -> Self {
        Self {
            salt_path: salt_path.into(),
        }
    }

    pub fn salt_path(&self) -> &Path {
        &self.salt_path
    }

    /// Derive the cipher key for `password`
    ///
    /// Deterministic: for a fixed password and persisted salt the result
    /// is identical across calls and process restarts.
    pub fn derive(&self, password: &MasterPassword) -> Result<DerivedKey> {
        let salt = self.load_or_create_salt()?;

        let mut key = [0u8; KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(
            password.expose().as_bytes(),
            &salt,
            PBKDF2_ITERATIONS,
            &mut key,
        );

        Ok(DerivedKey::new(BASE64URL.encode(&key)))
    }

    fn load_or_create_salt(&self) -> Result<[u8; SALT_LEN]> {
        if !self.salt_path.exists() {
            return self.create_salt();
        }

        let bytes = fs::read(&self.salt_path).map_err(|e| CryptoError::SaltCorrupted {
            reason: format!("unreadable: {}", e),
        })?;

        let salt: [u8; SALT_LEN] =
            bytes.as_slice()
                .try_into()
                .map_err(|_| CryptoError::SaltCorrupted {
                    reason: format!("expected {} bytes, found {}", SALT_LEN, bytes.len()),
                })?;

        Ok(salt)
    }

    fn create_salt(&self) -> Result<[u8; SALT_LEN]> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        if let Some(parent) = self.salt_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // create_new: an existing salt must never be clobbered
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.salt_path)?;
        file.write_all(&salt)?;

        debug!("Created new salt at {:?}", self.salt_path);
        Ok(salt)
    }
}
