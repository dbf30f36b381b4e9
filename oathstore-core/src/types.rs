//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};

/// Wrapper for a Base32-encoded OTP secret
///
/// This type ensures shared secrets are never accidentally logged or
/// exposed in debug output. Validation happens when a `CodeGenerator`
/// is constructed from it, not here.
#[derive(Clone, Debug)]
pub struct Base32Secret(Secret<String>);

impl Base32Secret {
    /// Create a new Base32Secret from the user-supplied text
    pub fn new(secret: String) -> Self {
        Self(Secret::new(secret))
    }

    /// Expose the secret value (use with caution!)
    ///
    /// This should only be called when passing the secret to the
    /// Base32 decoder.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Base32Secret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for Base32Secret {
    fn from(secret: &str) -> Self {
        Self::new(secret.to_string())
    }
}

/// Wrapper for a generated one-time code
///
/// Generated codes should also be treated as sensitive data and never
/// logged, even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct OtpCode(Secret<String>);

impl OtpCode {
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when sending the code to stdout or
    /// comparing it in tests.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// Wrapper for the master password protecting the secret store
#[derive(Clone, Debug)]
pub struct MasterPassword(Secret<String>);

impl MasterPassword {
    pub fn new(password: String) -> Self {
        Self(Secret::new(password))
    }

    /// Expose the password value (use with caution!)
    ///
    /// This should only be called when feeding the password into the
    /// key-derivation function.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for MasterPassword {
    fn from(password: String) -> Self {
        Self::new(password)
    }
}

/// Wrapper for a derived symmetric key
///
/// Holds the Base64-URL encoding of the 32 PBKDF2 output bytes. The
/// cipher decodes it back to raw bytes at construction time.
#[derive(Clone, Debug)]
pub struct DerivedKey(Secret<String>);

impl DerivedKey {
    pub fn new(encoded: String) -> Self {
        Self(Secret::new(encoded))
    }

    /// Expose the encoded key (use with caution!)
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
