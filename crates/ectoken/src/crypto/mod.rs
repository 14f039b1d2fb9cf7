//! AES-256-GCM token primitives.
//!
//! This module is free of encoding and I/O concerns. It provides key
//! derivation and the seal/open operations used by the token layer.
//!
//! # Key schedule
//!
//! ```text
//! derived_key = SHA-256(key)          // 32 bytes, no salt, single pass
//! sealed      = AES-256-GCM(derived_key, nonce, params, aad = "")
//!             = ciphertext || tag(16)
//! ```

pub mod cipher;
pub mod kdf;

pub use cipher::{generate_nonce, open, seal, CipherError, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, DerivedKey};
