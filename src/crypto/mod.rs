//! Cryptographic building blocks for verifier generation.
//!
//! Provides the shared HMAC/SHA-256 primitives, salt generation, and the
//! per-algorithm verifier builders.

pub mod kdf;
pub mod md5;
pub mod saslprep;
pub mod scram;

pub use kdf::{ScramParams, salted_password};
pub use scram::scram_sha_256;
pub use self::md5::md5_password;

use anyhow::{Result, anyhow};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest, and therefore of SaltedPassword and every
/// SCRAM key (32 bytes).
pub const SCRAM_KEY_LEN: usize = 32;
/// SCRAM iteration count PostgreSQL uses by default.
pub const DEFAULT_ITERATIONS: u32 = 4096;
/// Length of a freshly generated SCRAM salt (16 bytes).
pub const DEFAULT_SALT_LEN: usize = 16;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    getrandom::fill(buf).map_err(|_| anyhow!("OS random generator unavailable"))
}

/// Generate a fresh salt of `len` bytes, new for every call.
pub(crate) fn generate_salt(len: usize) -> Result<Vec<u8>> {
    let mut salt = vec![0u8; len];
    secure_random(&mut salt)?;
    Ok(salt)
}

/// Compute HMAC-SHA-256.
pub(crate) fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; SCRAM_KEY_LEN] {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC key length is always valid");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Compute SHA-256.
pub(crate) fn sha256(data: &[u8]) -> [u8; SCRAM_KEY_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// XOR `other` into `acc`, byte by byte. Operands must have equal length.
pub(crate) fn xor_assign(acc: &mut [u8], other: &[u8]) {
    debug_assert_eq!(acc.len(), other.len(), "XOR operands must have equal length");
    for (a, b) in acc.iter_mut().zip(other.iter()) {
        *a ^= *b;
    }
}
