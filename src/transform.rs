//! Bulk field transformation: encrypt-before-write / decrypt-after-read over
//! structured records.
//!
//! A record is a JSON object ([`serde_json::Map`]). The set of sensitive
//! field names is an external contract owned by the persistence layer; it is
//! declared once as a [`FieldSet`] and handed to a [`FieldTransformer`]
//! rather than passed as ad-hoc string lists per call, so a misspelled field
//! name is visible at construction instead of silently no-opping forever.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::crypto::cipher::FieldCipher;
use crate::error::CryptoError;

/// A record as stored and transformed: field name to JSON value.
pub type Record = serde_json::Map<String, Value>;

/// The declared set of sensitive field names in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    names: HashSet<String>,
}

impl FieldSet {
    /// Build a field set from an explicit list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `name` is declared sensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of declared field names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the declared names. Order is unspecified; fields are
    /// independent, so transformation order never matters.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Applies the cipher across the declared fields of a record.
///
/// Both directions return a transformed shallow copy and never mutate the
/// input. Fields that are absent, empty strings, or non-string values are
/// left exactly as they are — an empty string stays `""`, it is never
/// replaced with `null`.
#[derive(Clone, Debug)]
pub struct FieldTransformer {
    cipher: FieldCipher,
    fields: FieldSet,
}

impl FieldTransformer {
    /// Build a transformer from a cipher and the declared sensitive fields.
    pub fn new(cipher: FieldCipher, fields: FieldSet) -> Self {
        Self { cipher, fields }
    }

    /// The declared sensitive fields.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Encrypt every declared field that holds a non-empty string.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailed`] only on an internal AEAD
    /// error; absent or empty fields never error.
    pub fn encrypt_record(&self, record: &Record) -> Result<Record, CryptoError> {
        let mut out = record.clone();
        for name in self.fields.names() {
            let Some(value) = out.get_mut(name) else {
                continue;
            };
            match value {
                Value::String(s) if !s.is_empty() => {
                    if let Some(envelope) = self.cipher.encrypt(s)? {
                        *value = Value::String(envelope);
                    }
                }
                Value::String(_) | Value::Null => {}
                _ => debug!(field = name, "skipping non-string sensitive field"),
            }
        }
        Ok(out)
    }

    /// Decrypt every declared field that holds a non-empty string.
    ///
    /// A field whose envelope is malformed or fails authentication becomes
    /// `null` ("value unavailable") after the failure is logged — a damaged
    /// value never takes the whole record down. Absent and empty fields are
    /// untouched, so `null` unambiguously means a failed decryption.
    pub fn decrypt_record(&self, record: &Record) -> Record {
        let mut out = record.clone();
        for name in self.fields.names() {
            let Some(value) = out.get_mut(name) else {
                continue;
            };
            match value {
                Value::String(s) if !s.is_empty() => {
                    *value = match self.cipher.decrypt_or_none(s) {
                        Some(plaintext) => Value::String(plaintext),
                        None => Value::Null,
                    };
                }
                Value::String(_) | Value::Null => {}
                _ => debug!(field = name, "skipping non-string sensitive field"),
            }
        }
        out
    }
}
