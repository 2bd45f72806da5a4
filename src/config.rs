//! Configuration loading for the encryption subsystem.
//!
//! The secret is read from environment variables at startup. Two names are
//! recognised, in priority order: `ENCRYPTION_KEY`, then `SECRET_KEY`. If
//! neither is set to a non-empty value, key derivation fails with
//! [`CryptoError::MissingSecret`] — a startup misconfiguration, not a
//! per-call error.

use serde::Deserialize;

use crate::error::CryptoError;

/// Encryption subsystem configuration, deserialised from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Primary secret variable (`ENCRYPTION_KEY`).
    pub encryption_key: Option<String>,

    /// Fallback secret variable (`SECRET_KEY`).
    pub secret_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Config`] if the environment cannot be
    /// deserialised. A missing secret is not an error here — it is reported
    /// by [`Config::secret`] consumers so the message can name both
    /// recognised variables.
    pub fn from_env() -> Result<Self, CryptoError> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    /// The configured secret: first non-empty of `ENCRYPTION_KEY`,
    /// `SECRET_KEY`. Values that are only whitespace count as unset.
    pub fn secret(&self) -> Option<&str> {
        [self.encryption_key.as_deref(), self.secret_key.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}
