//! Field-level authenticated encryption for sensitive record data.
//!
//! `fieldcrypt` protects individual sensitive fields (phone numbers,
//! identifiers) before they are handed to a persistence layer, and restores
//! them after read. It also carries the small supporting primitives the same
//! callers need: one-way hashing for equality checks without disclosure,
//! display-safe masking, and cryptographically secure token generation.
//!
//! # Envelope format
//!
//! ```text
//! <nonce-hex>:<tag-hex>:<ciphertext-hex>
//! ```
//!
//! All lowercase hex, exactly three `:`-delimited segments, no padding or
//! whitespace. The nonce is 16 random bytes generated per encryption, the tag
//! is the 16-byte AES-256-GCM authentication tag. This string is the persisted
//! representation and round-trips byte-for-byte through
//! [`Envelope::to_string_repr`] / [`Envelope::parse`].
//!
//! # Key handling
//!
//! The 32-byte key is derived (SHA-256) from a secret supplied through the
//! process environment, under either `ENCRYPTION_KEY` or `SECRET_KEY` (first
//! non-empty wins). The secret is owned by an explicit [`KeyProvider`] value
//! constructed once at startup — there is no process-global singleton, so
//! tests and hosts can build independent providers with different secrets.
//!
//! # Failure policy
//!
//! Decryption of malformed or tampered ciphertext never panics and never
//! corrupts data: the strict [`FieldCipher::decrypt`] reports the failure
//! kind ([`CryptoError::InvalidFormat`] vs
//! [`CryptoError::AuthenticationFailed`]), while the lenient
//! [`FieldCipher::decrypt_or_none`] logs it and yields `None` so bulk reads
//! keep working when individual values are damaged.

mod config;
pub mod crypto;
mod error;
mod hash;
mod keys;
mod mask;
mod token;
pub mod transform;

pub use config::Config;
pub use crypto::cipher::FieldCipher;
pub use crypto::envelope::{Envelope, NONCE_LEN, TAG_LEN};
pub use error::CryptoError;
pub use hash::sha256_hex;
pub use keys::{KeyProvider, KEY_LEN};
pub use mask::{mask, mask_opt};
pub use token::{generate_default_token, generate_token, DEFAULT_TOKEN_BYTES};
pub use transform::{FieldSet, FieldTransformer, Record};
