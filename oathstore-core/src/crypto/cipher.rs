//! Authenticated encryption for the serialized secret store
//!
//! AES-256-GCM keyed by the derived key. Sealed blobs are
//! self-contained: a fresh 96-bit nonce is generated per seal and
//! prepended to the ciphertext, so the whole blob can be written as the
//! entire contents of the store file.

use crate::crypto::kdf::KEY_LEN;
use crate::error::CryptoError;
use crate::types::DerivedKey;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use data_encoding::BASE64URL;

/// AES-GCM nonce length in bytes
pub const NONCE_LEN: usize = 12;

/// Authenticated symmetric cipher keyed by a [`DerivedKey`]
pub struct SecretCipher {
    cipher: Aes256Gcm,
}

impl SecretCipher {
    /// Build a cipher from the Base64-URL encoded derived key
    pub fn new(key: &DerivedKey) -> Result<Self, CryptoError> {
        let raw = BASE64URL
            .decode(key.expose().as_bytes())
            .map_err(|_| CryptoError::InvalidKey)?;

        if raw.len() != KEY_LEN {
            return Err(CryptoError::InvalidKey);
        }

        Ok(Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&raw)),
        })
    }

    /// Encrypt `plaintext` into a self-contained blob
    ///
    /// The nonce is random per call, so sealing the same plaintext twice
    /// yields different ciphertext.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(nonce.as_slice());
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Decrypt a sealed blob
    ///
    /// Fails closed: a wrong key, a truncated blob and a tampered blob
    /// all surface as the same `DecryptionFailed`, and no partial
    /// plaintext is ever returned.
    pub fn open(&self, blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if blob.len() < NONCE_LEN {
            return Err(CryptoError::DecryptionFailed);
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}
