//! HMAC-SHA1 implementation following RFC 2104
//!
//! The HOTP truncation step needs the raw 20-byte digest, so HMAC is
//! implemented directly on top of the SHA-1 hasher here rather than
//! pulled in through a higher-level OTP crate.
//!
//! Reference: https://www.ietf.org/rfc/rfc2104.txt
//! Block size: 64 bytes for SHA-1
//! Inner pad (ipad): 0x36
//! Outer pad (opad): 0x5C

use sha1::{Digest, Sha1};

const BLOCK_SIZE: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Compute HMAC-SHA1 over `message` keyed by `key`
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    let key_block = normalize_key(key);

    let mut inner = Sha1::new();
    inner.update(xor_block(&key_block, IPAD));
    inner.update(message);
    let inner_digest = inner.finalize();

    let mut outer = Sha1::new();
    outer.update(xor_block(&key_block, OPAD));
    outer.update(inner_digest);
    outer.finalize().into()
}

/// Bring the key to exactly one block: keys longer than the block size
/// are hashed first, shorter keys are zero-padded.
fn normalize_key(key: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    if key.len() > BLOCK_SIZE {
        let digest = Sha1::digest(key);
        block[..digest.len()].copy_from_slice(&digest);
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    block
}

fn xor_block(block: &[u8; BLOCK_SIZE], pad: u8) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (dst, src) in out.iter_mut().zip(block.iter()) {
        *dst = src ^ pad;
    }
    out
}
