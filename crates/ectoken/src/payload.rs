//! Binary layout of a decoded token.
//!
//! ```text
//! +-----------+----------------------+-----------+
//! | nonce(12) | ciphertext(N)        | tag(16)   |
//! +-----------+----------------------+-----------+
//! ```
//!
//! There is no version byte and no key identifier; both ends agree on the
//! layout out of band.

use crate::codec::FormatError;
use crate::crypto::{NONCE_LEN, TAG_LEN};

/// Smallest well-formed payload: a nonce and a tag around an empty ciphertext.
pub const MIN_LEN: usize = NONCE_LEN + TAG_LEN;

/// A nonce plus the sealed `ciphertext || tag` bytes it was used with.
///
/// Construction guarantees `sealed.len() >= TAG_LEN`, so the ciphertext/tag
/// split never goes out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePayload {
    nonce: [u8; NONCE_LEN],
    sealed: Vec<u8>,
}

impl WirePayload {
    /// Pair a nonce with the output of [`seal`](crate::crypto::seal).
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TooShort`] if `sealed` cannot contain a tag.
    pub fn from_parts(nonce: [u8; NONCE_LEN], sealed: Vec<u8>) -> Result<Self, FormatError> {
        if sealed.len() < TAG_LEN {
            return Err(FormatError::TooShort {
                len: NONCE_LEN + sealed.len(),
            });
        }
        Ok(Self { nonce, sealed })
    }

    /// Split a decoded payload into its fields.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TooShort`] if `bytes` is shorter than [`MIN_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < MIN_LEN {
            return Err(FormatError::TooShort { len: bytes.len() });
        }
        let (nonce_bytes, sealed) = bytes.split_at(NONCE_LEN);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        Ok(Self {
            nonce,
            sealed: sealed.to_vec(),
        })
    }

    /// Concatenate `nonce || ciphertext || tag`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.sealed);
        bytes
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// `ciphertext || tag`, the input expected by [`open`](crate::crypto::open).
    pub fn sealed(&self) -> &[u8] {
        &self.sealed
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.sealed[..self.sealed.len() - TAG_LEN]
    }

    pub fn tag(&self) -> &[u8] {
        &self.sealed[self.sealed.len() - TAG_LEN..]
    }

    /// Total encoded length in bytes.
    pub fn len(&self) -> usize {
        NONCE_LEN + self.sealed.len()
    }

    /// Always `false`; a payload holds at least a nonce and a tag.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        (0u8..(MIN_LEN as u8 + 5)).collect()
    }

    #[test]
    fn splits_fields_at_fixed_offsets() {
        let bytes = sample();
        let payload = WirePayload::from_bytes(&bytes).unwrap();
        assert_eq!(&payload.nonce()[..], &bytes[..12]);
        assert_eq!(payload.ciphertext(), &bytes[12..17]);
        assert_eq!(payload.tag(), &bytes[17..]);
        assert_eq!(payload.tag().len(), TAG_LEN);
        assert_eq!(payload.len(), bytes.len());
        assert_eq!(payload.to_bytes(), bytes);
    }

    #[test]
    fn minimum_length_has_empty_ciphertext() {
        let payload = WirePayload::from_bytes(&[7u8; MIN_LEN]).unwrap();
        assert!(payload.ciphertext().is_empty());
        assert_eq!(payload.tag(), &[7u8; TAG_LEN]);
    }

    #[test]
    fn rejects_short_payloads() {
        for len in [0, 1, NONCE_LEN, MIN_LEN - 1] {
            assert!(matches!(
                WirePayload::from_bytes(&vec![0u8; len]),
                Err(FormatError::TooShort { len: l }) if l == len
            ));
        }
    }

    #[test]
    fn from_parts_requires_tag() {
        assert!(WirePayload::from_parts([0u8; NONCE_LEN], vec![0u8; TAG_LEN - 1]).is_err());
        let payload = WirePayload::from_parts([1u8; NONCE_LEN], vec![2u8; TAG_LEN + 3]).unwrap();
        assert_eq!(payload.ciphertext(), &[2u8; 3]);
        assert_eq!(payload.len(), MIN_LEN + 3);
    }
}
