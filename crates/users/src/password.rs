//! Password transform: plaintext never reaches the repository.

use sha2::{Digest, Sha256};

/// Hash a plaintext password into the stored representation (hex SHA-256).
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext candidate against a stored hash.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    hash_password(plaintext) == stored_hash
}
