//! SCRAM-SHA-256 verifier construction.
//!
//! Builds the string PostgreSQL stores in `pg_authid.rolpassword` for roles
//! using SCRAM authentication (RFC 5802 / RFC 7677). Only verifier
//! generation lives here; the live challenge/response exchange is the
//! connecting client's business.

use anyhow::Result;
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use zeroize::Zeroizing;

use super::{ScramParams, generate_salt, hmac_sha256, salted_password, saslprep, sha256};

/// Build a SCRAM-SHA-256 verifier for `password` with a freshly generated
/// random salt.
///
/// Output shape is
/// `SCRAM-SHA-256$<iterations>:<salt>$<stored_key>:<server_key>` with the
/// salt and both keys in standard padded base64. Two calls with the same
/// password produce different verifiers; both are valid.
pub fn scram_sha_256(password: &str, params: &ScramParams) -> Result<String> {
    params.validate()?;
    let salt = generate_salt(params.salt_length())?;
    Ok(scram_sha_256_salt(password, &salt, params.iterations()))
}

// Verifier construction with a caller-provided salt, kept separate so tests
// can pin known-answer vectors.
pub(crate) fn scram_sha_256_salt(password: &str, salt: &[u8], iterations: u32) -> String {
    let prepared = saslprep::normalize(password);

    let salted = Zeroizing::new(salted_password(prepared.as_bytes(), salt, iterations));

    let client_key = hmac_sha256(&*salted, b"Client Key");
    let stored_key = sha256(&client_key);
    let server_key = hmac_sha256(&*salted, b"Server Key");

    format!(
        "SCRAM-SHA-256${}:{}${}:{}",
        iterations,
        B64.encode(salt),
        B64.encode(stored_key),
        B64.encode(server_key)
    )
}
