//! Password digests
//!
//! Single-pass, unsalted SHA-256 rendered as lowercase hex.

use sha2::{Digest, Sha256};

/// Length of a digest produced by [`hash_password`]
pub const DIGEST_LEN: usize = 64;

/// Hash a plaintext password into a 64 character hex digest.
pub fn hash_password(password: &str) -> String {
    let hash = Sha256::digest(password.as_bytes());
    format!("{hash:x}")
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> bool {
    constant_time_eq(hash_password(password).as_bytes(), digest.as_bytes())
}

/// Constant-time byte comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
