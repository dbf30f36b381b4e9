//! File-level orchestration of the encryption pipeline
//!
//! Ties [`KeyDerivation`] and [`SecretCipher`] to the on-disk layout:
//! password + encrypted store file in, plaintext document out, and the
//! reverse for writing. The ciphertext is always read and written as the
//! entire contents of a single file.

use crate::config::StorePaths;
use crate::crypto::cipher::SecretCipher;
use crate::crypto::kdf::KeyDerivation;
use crate::error::{CryptoError, OathstoreError, Result, StoreError};
use crate::types::MasterPassword;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct Vault {
    kdf: KeyDerivation,
    store_path: PathBuf,
}

impl Vault {
    pub fn new(paths: StorePaths) -> Self {
        Self {
            kdf: KeyDerivation::new(paths.salt_path),
            store_path: paths.store_path,
        }
    }

    /// An initialized vault has an encrypted store on disk
    pub fn is_initialized(&self) -> bool {
        self.store_path.exists()
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn salt_path(&self) -> &Path {
        self.kdf.salt_path()
    }

    /// Encrypt `plaintext` under `password` and write it as the whole
    /// store file
    pub fn seal_to_store(&self, password: &MasterPassword, plaintext: &str) -> Result<()> {
        let key = self.kdf.derive(password)?;
        let cipher = SecretCipher::new(&key)?;
        let blob = cipher.seal(plaintext.as_bytes())?;

        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.store_path, blob)?;

        info!("Wrote encrypted secret store to {:?}", self.store_path);
        Ok(())
    }

    /// Read the store file and decrypt it back to the plaintext document
    pub fn open_store(&self, password: &MasterPassword) -> Result<String> {
        let blob = fs::read(&self.store_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OathstoreError::Crypto(CryptoError::StoreNotFound {
                path: self.store_path.display().to_string(),
            }),
            _ => OathstoreError::Io(e),
        })?;

        let key = self.kdf.derive(password)?;
        let cipher = SecretCipher::new(&key)?;
        let plaintext = cipher.open(&blob)?;

        debug!("Decrypted secret store ({} bytes)", plaintext.len());
        String::from_utf8(plaintext).map_err(|_| StoreError::InvalidEncoding.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn password(s: &str) -> MasterPassword {
        MasterPassword::new(s.to_string())
    }

    #[test]
    fn test_seal_then_open() {
        let dir = tempdir().unwrap();
        let vault = Vault::new(StorePaths::in_dir(dir.path()));

        vault
            .seal_to_store(&password("hunter2"), "[mfa-a]\nkey = JBSWY3DPEHPK3PXP\n")
            .unwrap();
        assert!(vault.is_initialized());

        let text = vault.open_store(&password("hunter2")).unwrap();
        assert_eq!(text, "[mfa-a]\nkey = JBSWY3DPEHPK3PXP\n");
    }

    #[test]
    fn test_wrong_password_fails_closed() {
        let dir = tempdir().unwrap();
        let vault = Vault::new(StorePaths::in_dir(dir.path()));

        vault.seal_to_store(&password("right"), "secret text").unwrap();

        let result = vault.open_store(&password("wrong"));
        assert!(matches!(
            result,
            Err(OathstoreError::Crypto(CryptoError::DecryptionFailed))
        ));
    }

    #[test]
    fn test_missing_store_reported() {
        let dir = tempdir().unwrap();
        let vault = Vault::new(StorePaths::in_dir(dir.path()));

        assert!(!vault.is_initialized());
        let result = vault.open_store(&password("pw"));
        assert!(matches!(
            result,
            Err(OathstoreError::Crypto(CryptoError::StoreNotFound { .. }))
        ));
    }

    #[test]
    fn test_store_file_is_not_plaintext() {
        let dir = tempdir().unwrap();
        let vault = Vault::new(StorePaths::in_dir(dir.path()));

        let document = "[mfa-a]\nkey = JBSWY3DPEHPK3PXP\n";
        vault.seal_to_store(&password("pw"), document).unwrap();

        let on_disk = fs::read(vault.store_path()).unwrap();
        let needle = b"JBSWY3DPEHPK3PXP";
        assert!(!on_disk.windows(needle.len()).any(|w| w == needle));
    }
}
