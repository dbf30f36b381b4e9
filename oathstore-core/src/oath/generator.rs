//! HOTP/TOTP code generation
//!
//! Implements RFC 4226 HOTP with RFC 6238 time-based counters. A
//! generator is constructed once per secret and derives codes on demand:
//! either from an explicit counter fixed at construction (HOTP mode) or
//! from the current 30-second time step (TOTP mode).

use crate::error::OtpError;
use crate::oath::{base32, hmac};
use crate::types::{Base32Secret, OtpCode};
use secrecy::{ExposeSecret, Secret};
use std::time::{SystemTime, UNIX_EPOCH};

/// RFC 6238 default time step
pub const TIME_STEP_SECS: u64 = 30;

/// Default code width
pub const DEFAULT_DIGITS: u32 = 6;

/// A code generator bound to one decoded secret
///
/// Same secret + same counter always produce the same code; the clock is
/// the only external input, and only when no explicit counter was given.
pub struct CodeGenerator {
    key: Secret<Vec<u8>>,
    counter: Option<u64>,
    digits: u32,
}

impl CodeGenerator {
    /// Construct a generator from a Base32 secret
    ///
    /// `counter` fixes the generator in HOTP mode; `None` selects TOTP
    /// mode. Construction fails with `InvalidSecretEncoding` if the
    /// normalized secret does not decode as Base32, and with
    /// `InvalidDigits` for a code width outside 1..=9 (wider codes would
    /// exceed the 31 bits the truncation step yields).
    pub fn new(secret: &Base32Secret, counter: Option<u64>, digits: u32) -> Result<Self, OtpError> {
        if !(1..=9).contains(&digits) {
            return Err(OtpError::InvalidDigits { digits });
        }

        let key = base32::decode_secret(secret.expose())?;

        Ok(Self {
            key: Secret::new(key),
            counter,
            digits,
        })
    }

    /// Construct a time-based generator with the default code width
    pub fn totp(secret: &Base32Secret) -> Result<Self, OtpError> {
        Self::new(secret, None, DEFAULT_DIGITS)
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// The counter the next code will be derived from
    ///
    /// Returns the explicit counter in HOTP mode, otherwise
    /// `floor(unix_time / 30)`. Recomputed on every call.
    pub fn current_counter(&self) -> Result<u64, OtpError> {
        match self.counter {
            Some(counter) => Ok(counter),
            None => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_err(|_| OtpError::TimeError)?;
                Ok(now.as_secs() / TIME_STEP_SECS)
            }
        }
    }

    /// Generate the code for the current counter value
    pub fn generate_code(&self) -> Result<OtpCode, OtpError> {
        let counter = self.current_counter()?;
        Ok(self.generate_at(counter))
    }

    /// Generate the code for an explicit counter value
    ///
    /// RFC 4226 section 5.3: HMAC-SHA1 over the 8-byte big-endian
    /// counter, dynamic truncation to 31 bits, reduction modulo
    /// `10^digits`. The result is a display string, zero-padded on the
    /// left to exactly `digits` characters.
    pub fn generate_at(&self, counter: u64) -> OtpCode {
        let mac = hmac::hmac_sha1(self.key.expose_secret(), &counter.to_be_bytes());

        let offset = (mac[19] & 0x0F) as usize;
        let binary = u32::from_be_bytes([mac[offset], mac[offset + 1], mac[offset + 2], mac[offset + 3]])
            & 0x7FFF_FFFF;
        let code = u64::from(binary) % 10u64.pow(self.digits);

        OtpCode::new(format!("{:0width$}", code, width = self.digits as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotp(secret: &str, counter: u64, digits: u32) -> String {
        let generator = CodeGenerator::new(&secret.into(), Some(counter), digits).unwrap();
        generator.generate_code().unwrap().expose().to_string()
    }

    #[test]
    fn test_known_secret_counter_133() {
        let secret = "5T6UVD2LS7ROL6CIPQWPVNL5QUGCNBIFZW5LJZBDDRNRIK6G3IXULF22NYUMUCOG";
        assert_eq!(hotp(secret, 133, 6), "307519");
    }

    #[test]
    fn test_leading_zero_is_kept() {
        // Counter 4 for this secret truncates to a value below 100 000,
        // so the rendered code must carry the leading zero
        let secret = "5T6UVD2LS7ROL6CIPQWPVNL5QUGCNBIFZW5LJZBDDRNRIK6G3IXULF22NYUMUCOG";
        assert_eq!(hotp(secret, 4, 6), "063439");
    }

    #[test]
    fn test_rfc4226_appendix_d_vectors() {
        // Base32 encoding of the ASCII key "12345678901234567890"
        let secret = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
        let expected = [
            "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
            "399871", "520489",
        ];

        for (counter, code) in expected.iter().enumerate() {
            assert_eq!(hotp(secret, counter as u64, 6), *code);
        }
    }

    #[test]
    fn test_eight_digit_code() {
        let secret = "5T6UVD2LS7ROL6CIPQWPVNL5QUGCNBIFZW5LJZBDDRNRIK6G3IXULF22NYUMUCOG";
        assert_eq!(hotp(secret, 133, 8), "34307519");
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let secret: Base32Secret = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ".into();
        let a = CodeGenerator::new(&secret, Some(7), 6).unwrap();
        let b = CodeGenerator::new(&secret, Some(7), 6).unwrap();
        assert_eq!(
            a.generate_code().unwrap().expose(),
            b.generate_code().unwrap().expose()
        );
    }

    #[test]
    fn test_explicit_counter_is_fixed() {
        let generator =
            CodeGenerator::new(&"JBSWY3DPEHPK3PXP".into(), Some(42), 6).unwrap();
        assert_eq!(generator.current_counter().unwrap(), 42);
    }

    #[test]
    fn test_totp_counter_tracks_clock() {
        let generator = CodeGenerator::totp(&"JBSWY3DPEHPK3PXP".into()).unwrap();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let counter = generator.current_counter().unwrap();
        // The counter read may land one step after the reference read
        assert!(counter >= now / TIME_STEP_SECS);
        assert!(counter <= now / TIME_STEP_SECS + 1);
    }

    #[test]
    fn test_invalid_secret_rejected() {
        let result = CodeGenerator::new(&"NOT!BASE32".into(), None, 6);
        assert_eq!(result.err(), Some(OtpError::InvalidSecretEncoding));
    }

    #[test]
    fn test_invalid_digit_counts_rejected() {
        for digits in [0, 10, 11] {
            let result = CodeGenerator::new(&"JBSWY3DPEHPK3PXP".into(), None, digits);
            assert_eq!(result.err(), Some(OtpError::InvalidDigits { digits }));
        }
    }

    #[test]
    fn test_secret_with_whitespace() {
        let spaced = hotp("JBSW Y3DP EHPK 3PXP", 1, 6);
        let compact = hotp("JBSWY3DPEHPK3PXP", 1, 6);
        assert_eq!(spaced, compact);
    }
}
