//! AES-256-GCM field encryption primitives.
//!
//! This module is intentionally free of configuration and record-shape
//! dependencies: it encrypts and decrypts one string at a time given a
//! [`crate::KeyProvider`].
//!
//! # Envelope format
//!
//! ```text
//! <nonce-hex>:<tag-hex>:<ciphertext-hex>
//! ```
//!
//! A fresh random 16-byte nonce is generated per encryption, so identical
//! plaintexts never produce identical envelopes — repeated values stay
//! unlinkable across records.

pub mod cipher;
pub mod envelope;

pub use cipher::FieldCipher;
pub use envelope::{Envelope, NONCE_LEN, TAG_LEN};
