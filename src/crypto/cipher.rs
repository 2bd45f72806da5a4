//! AES-256-GCM encryption and decryption of individual string fields.
//!
//! A fresh random 128-bit nonce is drawn from the OS CSPRNG for every
//! encryption. **Never reuse a nonce under the same key**: reuse breaks both
//! confidentiality and authentication in GCM. Nonce generation therefore
//! lives inside [`FieldCipher::encrypt`] and is not a caller input.

use std::sync::Arc;

use aes_gcm::{
    aead::{consts::U16, rand_core::RngCore, Aead, KeyInit, OsRng},
    aes::Aes256,
    AesGcm, Key, Nonce,
};
use tracing::warn;

use crate::crypto::envelope::{Envelope, NONCE_LEN, TAG_LEN};
use crate::error::CryptoError;
use crate::keys::KeyProvider;

/// AES-256-GCM with a 128-bit nonce and the default 128-bit tag.
type FieldAead = AesGcm<Aes256, U16>;

/// Authenticated encryption of single field values.
///
/// Cheap to clone; all clones share one [`KeyProvider`] and its cached key.
/// Every method is safe to call concurrently from independent threads.
#[derive(Clone, Debug)]
pub struct FieldCipher {
    keys: Arc<KeyProvider>,
}

impl FieldCipher {
    /// Build a cipher over an explicitly constructed key provider.
    pub fn new(keys: KeyProvider) -> Self {
        Self {
            keys: Arc::new(keys),
        }
    }

    /// Build a cipher whose secret comes from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MissingSecret`] if no secret is configured —
    /// callers should treat this as startup-fatal.
    pub fn from_env() -> Result<Self, CryptoError> {
        Ok(Self::new(KeyProvider::from_env()?))
    }

    /// Encrypt one plaintext field value.
    ///
    /// Empty input returns `Ok(None)`: absent fields are legitimately left
    /// unencrypted, not an error. Repeated calls with identical plaintext
    /// produce different envelopes (fresh nonce per call).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailed`] on an internal AEAD error
    /// (unreachable with a valid key and nonce).
    pub fn encrypt(&self, plaintext: &str) -> Result<Option<String>, CryptoError> {
        if plaintext.is_empty() {
            return Ok(None);
        }

        let cipher = self.build_aead();

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::<U16>::from(nonce_bytes);

        // The aead API appends the tag to the ciphertext; the envelope keeps
        // them as separate segments.
        let mut combined = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|_| CryptoError::EncryptionFailed)?;
        if combined.len() < TAG_LEN {
            return Err(CryptoError::EncryptionFailed);
        }
        let tag_bytes = combined.split_off(combined.len() - TAG_LEN);
        let tag: [u8; TAG_LEN] = tag_bytes
            .try_into()
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let envelope = Envelope {
            nonce: nonce_bytes,
            tag,
            ciphertext: combined,
        };
        Ok(Some(envelope.to_string_repr()))
    }

    /// Decrypt one envelope string back to its plaintext.
    ///
    /// Empty input returns `Ok(None)`. The two failure kinds stay
    /// distinguishable so audit tooling can tell tampering from corruption;
    /// callers that want the collapse-to-`None` availability contract use
    /// [`FieldCipher::decrypt_or_none`].
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidFormat`] if `envelope` is not a valid
    /// 3-segment hex envelope, or [`CryptoError::AuthenticationFailed`] if
    /// the tag does not verify (wrong key, or tampered nonce, tag, or
    /// ciphertext).
    pub fn decrypt(&self, envelope: &str) -> Result<Option<String>, CryptoError> {
        if envelope.is_empty() {
            return Ok(None);
        }

        let parsed = Envelope::parse(envelope)?;
        let cipher = self.build_aead();
        let nonce = Nonce::<U16>::from(parsed.nonce);

        let mut buf = parsed.ciphertext;
        buf.extend_from_slice(&parsed.tag);

        let plaintext_bytes = cipher
            .decrypt(&nonce, buf.as_ref())
            .map_err(|_| CryptoError::AuthenticationFailed)?;

        let plaintext = String::from_utf8(plaintext_bytes)
            .map_err(|_| CryptoError::InvalidFormat("plaintext is not valid UTF-8".into()))?;
        Ok(Some(plaintext))
    }

    /// Decrypt, collapsing every failure to `None` after logging it.
    ///
    /// This is the availability-over-crash path used for bulk reads: a
    /// damaged or tampered value must never take the whole record down. The
    /// log line carries the failure kind but never the secret, the key, or
    /// the envelope contents.
    pub fn decrypt_or_none(&self, envelope: &str) -> Option<String> {
        match self.decrypt(envelope) {
            Ok(value) => value,
            Err(e) => {
                warn!(code = e.code(), error = %e, "field decryption failed");
                None
            }
        }
    }

    fn build_aead(&self) -> FieldAead {
        let key = Key::<FieldAead>::from(*self.keys.key());
        FieldAead::new(&key)
    }
}
