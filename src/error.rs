//! Error types for the field encryption subsystem.

use thiserror::Error;

/// Failures produced by the crypto layer.
///
/// The first two variants are startup misconfigurations and are fatal: the
/// process must not continue in a state where encryption would silently
/// no-op. The last three occur per operation; lenient callers
/// ([`crate::FieldCipher::decrypt_or_none`], bulk record decryption) recover
/// from them locally after logging.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// No encryption secret is configured in the process environment.
    #[error("no encryption secret configured: set ENCRYPTION_KEY or SECRET_KEY")]
    MissingSecret,

    /// The environment could not be read or deserialised into [`crate::Config`].
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The envelope string is malformed — wrong segment count, invalid hex,
    /// or a nonce/tag segment of the wrong length.
    #[error("invalid envelope format: {0}")]
    InvalidFormat(String),

    /// The authentication tag failed to verify: wrong key, or tampered
    /// nonce, tag, or ciphertext.
    #[error("authentication failed (wrong key or tampered data)")]
    AuthenticationFailed,

    /// The AEAD encryption operation itself failed. Unreachable with a valid
    /// key and nonce; kept so the failure is reportable rather than a panic.
    #[error("aead encryption failed")]
    EncryptionFailed,
}

impl CryptoError {
    /// Short machine-readable code for structured audit logs.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoError::MissingSecret => "missing_secret",
            CryptoError::Config(_) => "config",
            CryptoError::InvalidFormat(_) => "invalid_format",
            CryptoError::AuthenticationFailed => "auth_failed",
            CryptoError::EncryptionFailed => "encrypt_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(CryptoError::MissingSecret.code(), "missing_secret");
        assert_eq!(
            CryptoError::InvalidFormat("x".into()).code(),
            "invalid_format"
        );
        assert_eq!(CryptoError::AuthenticationFailed.code(), "auth_failed");
        assert_eq!(CryptoError::EncryptionFailed.code(), "encrypt_failed");
    }

    #[test]
    fn display_includes_reason() {
        let e = CryptoError::InvalidFormat("expected 3 segments, got 2".into());
        assert!(e.to_string().contains("expected 3 segments"));
    }

    #[test]
    fn display_names_the_env_vars() {
        let msg = CryptoError::MissingSecret.to_string();
        assert!(msg.contains("ENCRYPTION_KEY"));
        assert!(msg.contains("SECRET_KEY"));
    }
}
