//! Legacy MD5 password verifier.

use md5::{Digest, Md5};

/// Build the MD5 verifier `"md5" || hex(md5(password || username))`.
///
/// The digest input is password first, then username; PostgreSQL stores the
/// value derived in that order and a reversed concatenation never matches.
/// No SASLprep is applied on the MD5 path.
pub fn md5_password(password: &str, username: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(username.as_bytes());
    let digest = hasher.finalize();

    format!("md5{}", hex_encode(&digest))
}

/// Encode bytes as lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
