//! Key derivation and secret-store encryption
//!
//! Turns the master password into a symmetric key and seals the
//! serialized secret store with it.

pub mod cipher;
pub mod kdf;
pub mod vault;
