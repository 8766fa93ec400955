mod crypto;
mod error;

pub use crate::crypto::{DEFAULT_ITERATIONS, DEFAULT_SALT_LEN, SCRAM_KEY_LEN, ScramParams};
pub use crate::error::EncryptError;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// Password authentication methods understood by PostgreSQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    ScramSha256,
}

impl FromStr for Algorithm {
    type Err = EncryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "scram-sha-256" => Ok(Algorithm::ScramSha256),
            other => Err(EncryptError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Md5 => f.write_str("md5"),
            Algorithm::ScramSha256 => f.write_str("scram-sha-256"),
        }
    }
}

/// Build a password verifier with the default SCRAM parameters
/// (4096 iterations, 16-byte salt).
pub fn encrypt(username: &str, password: &str, algorithm: Algorithm) -> Result<String> {
    encrypt_with(username, password, algorithm, ScramParams::default())
}

/// Build a password verifier for `username`.
///
/// The returned string is exactly what PostgreSQL accepts in the password
/// clause of `CREATE ROLE` / `ALTER ROLE` for the chosen method. `params`
/// only applies to SCRAM-SHA-256; MD5 takes no parameters and silently
/// ignores them. SCRAM in turn never reads the username, which the SASL
/// exchange authenticates separately.
pub fn encrypt_with(
    username: &str,
    password: &str,
    algorithm: Algorithm,
    params: ScramParams,
) -> Result<String> {
    if password.is_empty() {
        return Err(EncryptError::InvalidParameter("password must not be empty".into()).into());
    }

    match algorithm {
        Algorithm::Md5 => {
            if username.is_empty() {
                return Err(EncryptError::InvalidParameter(
                    "username must not be empty for md5".into(),
                )
                .into());
            }
            Ok(crypto::md5_password(password, username))
        }
        Algorithm::ScramSha256 => crypto::scram_sha_256(password, &params),
    }
}
