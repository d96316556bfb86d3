//! Password digests.
//!
//! A single unsalted SHA-256 pass, hex encoded. Existing rows depend on this
//! exact format, so swapping in a salted KDF needs a migration of stored digests.

use sha2::{Digest, Sha256};

/// Hash a password to its lowercase hex SHA-256 digest.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
