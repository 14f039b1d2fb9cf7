//! [`DerivedKey`]: SHA-256 normalisation of an alphanumeric key string.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::cipher::KEY_LEN;

/// Fixed-size AES-256 key produced by [`derive_key`].
///
/// The bytes are overwritten with zeroes on drop and never appear in `Debug`
/// output.
#[derive(Clone)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for DerivedKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Hash `key` with a single SHA-256 pass.
///
/// No salt and no iteration count. The same key string always yields the same
/// derived key.
pub fn derive_key(key: &str) -> DerivedKey {
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&digest);
    DerivedKey(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_sha256_vector() {
        let key = derive_key("abc");
        assert_eq!(
            hex::encode(key.as_bytes()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn deterministic() {
        let a = derive_key("GF8PHCp3xy5ypSaJKmPMH2M4");
        let b = derive_key("GF8PHCp3xy5ypSaJKmPMH2M4");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn distinct_keys_differ() {
        assert_ne!(derive_key("keyA").as_bytes(), derive_key("keyB").as_bytes());
    }

    #[test]
    fn redacted_in_debug() {
        let key = derive_key("secret");
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(&hex::encode(key.as_bytes())));
    }
}
