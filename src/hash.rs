//! One-way hashing for equality checks without disclosure.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `data`, hex-encoded (64 lowercase hex characters).
///
/// Deterministic and total: the same input always yields the same digest, so
/// stored digests can be compared against freshly hashed candidates without
/// the original value ever being persisted or transmitted.
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}
