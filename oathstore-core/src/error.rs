//! Error types for the oathstore tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the oathstore application
#[derive(Error, Debug)]
pub enum OathstoreError {
    /// Errors related to OTP code generation
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Errors related to key derivation and store encryption
    #[error("Cryptography error: {0}")]
    Crypto(#[from] CryptoError),

    /// Errors related to parsing and querying the secret store
    #[error("Secret store error: {0}")]
    Store(#[from] StoreError),

    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// OTP code generation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OtpError {
    /// The secret does not decode as Base32 after normalization
    #[error("invalid Base32 secret encoding")]
    InvalidSecretEncoding,

    /// Requested code width outside the supported 1..=9 range
    #[error("invalid digit count: {digits} (must be between 1 and 9)")]
    InvalidDigits { digits: u32 },

    /// System clock is unusable (before the Unix epoch)
    #[error("system time error")]
    TimeError,
}

/// Key derivation and store encryption errors
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The persisted salt exists but cannot be used. The salt is never
    /// regenerated in this case: doing so would strand every previously
    /// encrypted store.
    #[error("salt file corrupted: {reason}")]
    SaltCorrupted { reason: String },

    /// Authentication failure on decrypt. The message deliberately does
    /// not distinguish a wrong password from corrupted ciphertext.
    #[error("decryption failed: wrong password or corrupted store")]
    DecryptionFailed,

    #[error("encryption failed")]
    EncryptionFailed,

    /// The derived key does not decode to a usable cipher key
    #[error("invalid cipher key")]
    InvalidKey,

    /// No encrypted store exists at the configured location
    #[error("encrypted secret store not found: {path}")]
    StoreNotFound { path: String },
}

/// Secret store parsing and lookup errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// A section of the store document is malformed
    #[error("failed to parse secret store section `{section}`: {reason}")]
    ConfigParseError { section: String, reason: String },

    /// A property appeared before any section header
    #[error("property outside of any section at line {line}")]
    OrphanProperty { line: usize },

    /// A section header line is not of the form `[name]`
    #[error("malformed section header at line {line}")]
    MalformedHeader { line: usize },

    /// A section's secret failed Base32 validation
    #[error("invalid secret for account `{section}`")]
    InvalidSecret {
        section: String,
        #[source]
        source: OtpError,
    },

    /// The decrypted store document is not valid UTF-8 text
    #[error("secret store document is not valid UTF-8")]
    InvalidEncoding,
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OathstoreError>;
