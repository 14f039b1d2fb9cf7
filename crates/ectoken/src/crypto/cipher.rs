//! AES-256-GCM sealing and opening of token plaintexts.
//!
//! **Nonces are random, never counters.** Each [`seal`] call must use a fresh
//! value from [`generate_nonce`]. GCM nonce reuse under one key breaks both
//! confidentiality and authentication.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use thiserror::Error;

use super::kdf::DerivedKey;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Errors produced by the cipher layer.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key length: expected {KEY_LEN} bytes")]
    InvalidKeyLength,

    /// AES-GCM encryption or decryption failed.
    #[error("aead operation failed")]
    AeadFailure,
}

/// Fill a nonce from the OS CSPRNG.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    use aes_gcm::aead::rand_core::RngCore;
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Encrypt `plaintext` with no associated data.
///
/// The output is `ciphertext || tag`, exactly `plaintext.len() + TAG_LEN` bytes.
///
/// # Errors
///
/// Returns [`CipherError::AeadFailure`] on an internal AEAD error (unreachable
/// for plaintexts within the token length limit).
pub fn seal(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let cipher = build_cipher(key.as_bytes())?;
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| CipherError::AeadFailure)
}

/// Decrypt and authenticate `sealed` (`ciphertext || tag`).
///
/// # Errors
///
/// Returns [`CipherError::AeadFailure`] if authentication fails (wrong key or
/// tampered nonce, ciphertext or tag).
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    sealed: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let cipher = build_cipher(key.as_bytes())?;
    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| CipherError::AeadFailure)
}

fn build_cipher(key: &[u8]) -> Result<Aes256Gcm, CipherError> {
    if key.len() != KEY_LEN {
        return Err(CipherError::InvalidKeyLength);
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength)
}
