//! [`KeyProvider`]: derivation and caching of the symmetric field key.

use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::error::CryptoError;

/// Byte length of the derived AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Fixed-size buffer holding exactly [`KEY_LEN`] bytes of key material.
///
/// When this type is dropped, the memory is overwritten with zeroes to
/// minimise the window during which plaintext key material lives in RAM.
struct KeyBytes(Box<[u8; KEY_LEN]>);

impl Drop for KeyBytes {
    fn drop(&mut self) {
        // Zero the key material on drop.
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("KeyBytes([REDACTED])")
    }
}

/// Owns the externally supplied secret and the key derived from it.
///
/// The key is SHA-256 of the secret's raw bytes: deterministic, so the same
/// secret yields the same key in every call and every process. Derivation is
/// lazy and happens at most once per provider; the cached value is immutable
/// thereafter and safe to read from any number of threads. Concurrent first
/// use is harmless — racing initialisers all compute the identical value and
/// [`OnceLock`] publishes exactly one of them.
///
/// There is deliberately no process-global instance: hosts construct one
/// provider at startup and hand it to [`crate::FieldCipher`], and tests can
/// build independent providers with different secrets.
pub struct KeyProvider {
    secret: String,
    derived: OnceLock<KeyBytes>,
}

impl KeyProvider {
    /// Create a provider from an explicit secret.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MissingSecret`] if the secret is empty or
    /// whitespace-only.
    pub fn new(secret: impl Into<String>) -> Result<Self, CryptoError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(CryptoError::MissingSecret);
        }
        Ok(Self {
            secret,
            derived: OnceLock::new(),
        })
    }

    /// Create a provider from the process environment.
    ///
    /// Reads the first non-empty of `ENCRYPTION_KEY`, `SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MissingSecret`] if neither variable holds a
    /// non-empty value, or [`CryptoError::Config`] if the environment cannot
    /// be read.
    pub fn from_env() -> Result<Self, CryptoError> {
        let cfg = Config::from_env()?;
        let secret = cfg.secret().ok_or(CryptoError::MissingSecret)?;
        Self::new(secret)
    }

    /// Borrow the derived 32-byte key, deriving and caching it on first use.
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self
            .derived
            .get_or_init(|| {
                let digest = Sha256::digest(self.secret.as_bytes());
                let mut buf = Box::new([0u8; KEY_LEN]);
                buf.copy_from_slice(&digest);
                KeyBytes(buf)
            })
            .0
    }
}

impl std::fmt::Debug for KeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Redact both the secret and the cached key.
        f.debug_struct("KeyProvider")
            .field("secret", &"[REDACTED]")
            .field("derived", &self.derived.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let a = KeyProvider::new("shared-secret").unwrap();
        let b = KeyProvider::new("shared-secret").unwrap();
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn different_secrets_derive_different_keys() {
        let a = KeyProvider::new("secret-one").unwrap();
        let b = KeyProvider::new("secret-two").unwrap();
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn repeated_calls_return_the_cached_key() {
        let provider = KeyProvider::new("secret").unwrap();
        let first = *provider.key();
        assert_eq!(provider.key(), &first);
    }

    #[test]
    fn empty_secret_rejected() {
        assert!(matches!(
            KeyProvider::new(""),
            Err(CryptoError::MissingSecret)
        ));
        assert!(matches!(
            KeyProvider::new("   "),
            Err(CryptoError::MissingSecret)
        ));
    }

    #[test]
    fn debug_output_is_redacted() {
        let provider = KeyProvider::new("top-secret-value").unwrap();
        provider.key();
        let rendered = format!("{provider:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("top-secret-value"));
    }

    #[test]
    fn concurrent_first_use_converges() {
        use std::sync::Arc;

        let provider = Arc::new(KeyProvider::new("racing-secret").unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || *provider.key())
            })
            .collect();

        let expected = *provider.key();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
