//! Cryptographically secure random token generation.

use rand::rngs::OsRng;
use rand::RngCore;

/// Default token entropy in bytes (yields 64 hex characters).
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Generate a random token of `byte_length` bytes, hex-encoded.
///
/// The output is `2 × byte_length` hex characters drawn from the OS CSPRNG
/// and is not predictable from prior outputs. Entropy-source exhaustion is
/// the only failure mode and the RNG treats it as fatal, so this function is
/// infallible in practice.
pub fn generate_token(byte_length: usize) -> String {
    let mut buf = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Generate a token with the default [`DEFAULT_TOKEN_BYTES`] of entropy.
pub fn generate_default_token() -> String {
    generate_token(DEFAULT_TOKEN_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_length_is_twice_the_byte_count() {
        assert_eq!(generate_token(32).len(), 64);
        assert_eq!(generate_token(16).len(), 32);
        assert_eq!(generate_default_token().len(), 64);
    }

    #[test]
    fn token_is_lowercase_hex() {
        let token = generate_token(32);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn successive_tokens_differ() {
        assert_ne!(generate_token(32), generate_token(32));
    }

    #[test]
    fn zero_length_yields_empty_token() {
        assert_eq!(generate_token(0), "");
    }
}
