//! [`Envelope`]: the serialised `(nonce, tag, ciphertext)` triple.

use crate::error::CryptoError;

/// Byte length of the AES-GCM nonce (16 bytes = 128 bits).
pub const NONCE_LEN: usize = 16;

/// Byte length of the AES-GCM authentication tag (16 bytes = 128 bits).
pub const TAG_LEN: usize = 16;

/// One encrypted value, parsed into its fixed-role components.
///
/// The string representation is `<nonce-hex>:<tag-hex>:<ciphertext-hex>`,
/// all lowercase hex, exactly three segments. Any other segment count is not
/// a valid envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Raw nonce bytes, single-use, random per encryption.
    pub nonce: [u8; NONCE_LEN],
    /// Raw authentication tag bytes.
    pub tag: [u8; TAG_LEN],
    /// Raw ciphertext bytes (variable length).
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Encode this envelope to its canonical wire string.
    pub fn to_string_repr(&self) -> String {
        format!(
            "{}:{}:{}",
            hex::encode(self.nonce),
            hex::encode(self.tag),
            hex::encode(&self.ciphertext),
        )
    }

    /// Parse a wire string back into an [`Envelope`].
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidFormat`] if the string does not have
    /// exactly three `:`-delimited segments, any segment is not valid hex,
    /// or the nonce/tag segments decode to the wrong length.
    pub fn parse(s: &str) -> Result<Self, CryptoError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(CryptoError::InvalidFormat(format!(
                "expected 3 segments, got {}",
                parts.len()
            )));
        }

        let nonce = decode_fixed::<NONCE_LEN>(parts[0], "nonce")?;
        let tag = decode_fixed::<TAG_LEN>(parts[1], "tag")?;
        let ciphertext = hex::decode(parts[2])
            .map_err(|_| CryptoError::InvalidFormat("ciphertext segment is not hex".into()))?;

        Ok(Self {
            nonce,
            tag,
            ciphertext,
        })
    }
}

/// Hex-decode a segment that must be exactly `N` bytes long.
fn decode_fixed<const N: usize>(segment: &str, role: &str) -> Result<[u8; N], CryptoError> {
    let bytes = hex::decode(segment)
        .map_err(|_| CryptoError::InvalidFormat(format!("{role} segment is not hex")))?;
    bytes.try_into().map_err(|_| {
        CryptoError::InvalidFormat(format!("{role} segment must be {N} bytes"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Envelope {
        Envelope {
            nonce: [0xAB; NONCE_LEN],
            tag: [0x01; TAG_LEN],
            ciphertext: vec![0xDE, 0xAD, 0xBE, 0xEF],
        }
    }

    #[test]
    fn wire_round_trip() {
        let envelope = sample();
        let s = envelope.to_string_repr();
        assert_eq!(Envelope::parse(&s).unwrap(), envelope);
        // Re-encoding reproduces the exact string.
        assert_eq!(Envelope::parse(&s).unwrap().to_string_repr(), s);
    }

    #[test]
    fn wire_string_is_lowercase_hex() {
        let s = sample().to_string_repr();
        assert_eq!(s.split(':').count(), 3);
        assert!(s
            .chars()
            .all(|c| c == ':' || c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(s.starts_with("abab"));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(Envelope::parse("aabb:ccdd").is_err());
        assert!(Envelope::parse("aa:bb:cc:dd").is_err());
        assert!(Envelope::parse("").is_err());
        assert!(Envelope::parse("no-colons-at-all").is_err());
    }

    #[test]
    fn rejects_non_hex_segments() {
        let valid = sample().to_string_repr();
        let mut parts: Vec<String> = valid.split(':').map(String::from).collect();
        parts[2] = "zzzz".into();
        assert!(Envelope::parse(&parts.join(":")).is_err());
    }

    #[test]
    fn rejects_wrong_nonce_length() {
        // 12-byte nonce segment: valid hex, wrong length.
        let s = format!(
            "{}:{}:{}",
            hex::encode([0u8; 12]),
            hex::encode([0u8; TAG_LEN]),
            "deadbeef"
        );
        let err = Envelope::parse(&s).unwrap_err();
        assert!(err.to_string().contains("nonce"));
    }

    #[test]
    fn rejects_wrong_tag_length() {
        let s = format!(
            "{}:{}:{}",
            hex::encode([0u8; NONCE_LEN]),
            hex::encode([0u8; 8]),
            "deadbeef"
        );
        assert!(Envelope::parse(&s).is_err());
    }
}
