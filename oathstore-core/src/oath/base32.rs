//! Base32 secret normalization and decoding
//!
//! Shared secrets arrive as human-typed Base32 text: embedded whitespace,
//! missing `=` padding and lowercase letters are all accepted. Decoding
//! happens in three steps:
//! 1. Remove whitespace
//! 2. Right-pad with `=` to an 8-character boundary
//! 3. Decode case-insensitively

use crate::error::OtpError;
use data_encoding::BASE32;

/// Remove whitespace from the input string
fn clean(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Pad the input string to an 8-character boundary
///
/// Formula: padding_length = (8 - (len % 8)) % 8
fn pad(input: &str) -> String {
    let padding_len = (8 - (input.len() % 8)) % 8;
    format!("{}{}", input, "=".repeat(padding_len))
}

/// Decode a normalized Base32 secret to raw key bytes
pub fn decode_secret(input: &str) -> Result<Vec<u8>, OtpError> {
    let padded = pad(&clean(input));

    BASE32
        .decode(padded.to_uppercase().as_bytes())
        .map_err(|_| OtpError::InvalidSecretEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_spaces() {
        assert_eq!(clean("JBSW Y3DP EHPK 3PXP"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_clean_removes_tabs_and_newlines() {
        assert_eq!(clean("JBSW\tY3DP\nEHPK 3PXP"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_pad_no_padding_needed() {
        // Length 16, already a multiple of 8
        assert_eq!(pad("JBSWY3DPEHPK3PXP"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_pad_needs_padding() {
        // Length 14, needs 2 padding chars to reach 16
        assert_eq!(pad("JBSWY3DPEHPK3P"), "JBSWY3DPEHPK3P==");
    }

    #[test]
    fn test_pad_formula() {
        // Every length from 1 to 8 pads up to exactly 8
        for len in 1..=8 {
            let input = "A".repeat(len);
            assert_eq!(pad(&input).len(), 8);
        }
    }

    #[test]
    fn test_decode_valid() {
        let bytes = decode_secret("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(bytes.len(), 10);
    }

    #[test]
    fn test_decode_with_spaces_matches_without() {
        let with_spaces = decode_secret("JBSW Y3DP EHPK 3PXP").unwrap();
        let without_spaces = decode_secret("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(with_spaces, without_spaces);
    }

    #[test]
    fn test_decode_casefold() {
        let upper = decode_secret("JBSWY3DPEHPK3PXP").unwrap();
        let lower = decode_secret("jbswy3dpehpk3pxp").unwrap();
        let mixed = decode_secret("JbSwY3DpEhPk3PxP").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_decode_unpadded_input() {
        // 32 chars decode without any caller-side padding
        assert!(decode_secret("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").is_ok());
    }

    #[test]
    fn test_decode_invalid() {
        let result = decode_secret("INVALID@CHARS!");
        assert_eq!(result.unwrap_err(), OtpError::InvalidSecretEncoding);
    }

    #[test]
    fn test_decode_empty() {
        // The empty string is valid Base32 for an empty key
        assert_eq!(decode_secret("").unwrap(), Vec::<u8>::new());
    }
}
