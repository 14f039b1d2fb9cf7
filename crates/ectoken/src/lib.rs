//! Version 3 edge tokens: short parameter strings sealed with AES-256-GCM and
//! carried as unpadded URL-safe base64.
//!
//! # Token format
//!
//! ```text
//! token = urlsafe_b64_nopad( nonce(12) || ciphertext(N) || tag(16) )
//! key   = SHA-256(alphanumeric key string)
//! ```
//!
//! # Example
//!
//! ```
//! let token = ectoken::encrypt("GF8PHCp3xy5ypSaJKmPMH2M4", "ec_expire=1257642471", false)?;
//! let params = ectoken::decrypt("GF8PHCp3xy5ypSaJKmPMH2M4", &token, false)?;
//! assert_eq!(params, "ec_expire=1257642471");
//! # Ok::<(), ectoken::TokenError>(())
//! ```
//!
//! Every call is self-contained: there is no shared state, and the only shared
//! resource is the OS random number generator.

pub mod codec;
pub mod crypto;
pub mod diagnostics;
pub mod error;
pub mod payload;
pub mod token;
pub mod validate;

pub use diagnostics::{DiagnosticSink, NoopSink, Operation, TokenDiagnostics, TracingSink};
pub use error::{ErrorKind, TokenError};
pub use token::{
    decrypt, decrypt_bytes, decrypt_bytes_with_sink, decrypt_with_sink, encrypt,
    encrypt_with_sink,
};
