use anyhow::Result;

use super::{DEFAULT_ITERATIONS, DEFAULT_SALT_LEN, SCRAM_KEY_LEN, hmac_sha256, xor_assign};
use crate::error::EncryptError;

/// Tunable parameters for SCRAM-SHA-256 verifier generation.
///
/// MD5 takes no parameters; these only affect the SCRAM path.
#[derive(Debug, Clone, Copy)]
pub struct ScramParams {
    iterations: u32,
    salt_length: usize,
}

impl Default for ScramParams {
    fn default() -> Self {
        Self {
            // iteration count PostgreSQL ships with
            iterations: DEFAULT_ITERATIONS,
            // default salt length
            salt_length: DEFAULT_SALT_LEN,
        }
    }
}

impl ScramParams {
    pub fn new(iterations: u32, salt_length: usize) -> Result<Self> {
        let params = Self {
            iterations,
            salt_length,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn salt_length(&self) -> usize {
        self.salt_length
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(EncryptError::InvalidParameter(
                "scram iteration count must be >= 1".into(),
            )
            .into());
        }
        if self.salt_length < 1 {
            return Err(EncryptError::InvalidParameter(
                "scram salt length must be >= 1".into(),
            )
            .into());
        }
        Ok(())
    }
}

/// The `Hi` function from RFC 5802, producing the SCRAM SaltedPassword.
///
/// `U1 = HMAC(password, salt || INT(1))`, then `Ui = HMAC(password, U(i-1))`,
/// and the result is the XOR accumulation of every round. Unlike generic
/// PBKDF2, each round after the first re-hashes the previous digest only;
/// the salt never re-enters the loop.
pub fn salted_password(password: &[u8], salt: &[u8], iterations: u32) -> [u8; SCRAM_KEY_LEN] {
    debug_assert!(iterations >= 1, "iteration count must be >= 1");

    let mut message = Vec::with_capacity(salt.len() + 4);
    message.extend_from_slice(salt);
    message.extend_from_slice(&1u32.to_be_bytes());

    let mut prev = hmac_sha256(password, &message);
    let mut result = prev;

    for _ in 1..iterations {
        prev = hmac_sha256(password, &prev);
        xor_assign(&mut result, &prev);
    }

    result
}
