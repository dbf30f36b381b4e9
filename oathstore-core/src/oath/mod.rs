//! One-time-password generation
//!
//! Base32 secret handling, HMAC-SHA1, and HOTP/TOTP code derivation.

pub mod base32;
pub mod generator;
pub mod hmac;
