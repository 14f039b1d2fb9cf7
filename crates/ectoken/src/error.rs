//! Top-level token error type.

use thiserror::Error;

use crate::codec::FormatError;
use crate::crypto::cipher::CipherError;
use crate::validate::MAX_PARAMS_LEN;

/// Errors returned by [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt).
///
/// Each variant maps to a stable process exit code via [`TokenError::exit_code`]:
/// - [`TokenError::InvalidKey`] → 2
/// - [`TokenError::ParamLength`] → 3
/// - [`TokenError::Format`] → 4
/// - [`TokenError::Authentication`] → 5
/// - [`TokenError::Internal`] → 70
#[derive(Debug, Error)]
pub enum TokenError {
    /// The key is empty or contains characters outside `[A-Za-z0-9]`.
    #[error("key must be at least 1 character in length and only contain alphanumeric characters")]
    InvalidKey,

    /// The plaintext is empty or longer than [`MAX_PARAMS_LEN`] bytes.
    #[error("params must be between 1 and {MAX_PARAMS_LEN} characters in length")]
    ParamLength {
        /// Byte length of the rejected plaintext.
        len: usize,
    },

    /// The token text is not valid base64 or decodes to a truncated payload.
    #[error("malformed token: {0}")]
    Format(#[from] FormatError),

    /// AEAD verification failed. Wrong key and tampered data are indistinguishable.
    #[error("token authentication failed")]
    Authentication,

    /// The cipher could not be constructed or sealing failed. Never caused by
    /// caller input.
    #[error("internal cipher error: {0}")]
    Internal(CipherError),
}

/// Fieldless discriminant of [`TokenError`] for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKey,
    ParamLength,
    Format,
    Authentication,
    Internal,
}

impl TokenError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::InvalidKey => ErrorKind::InvalidKey,
            TokenError::ParamLength { .. } => ErrorKind::ParamLength,
            TokenError::Format(_) => ErrorKind::Format,
            TokenError::Authentication => ErrorKind::Authentication,
            TokenError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns the process exit code a CLI should use for this error.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::InvalidKey => 2,
            ErrorKind::ParamLength => 3,
            ErrorKind::Format => 4,
            ErrorKind::Authentication => 5,
            ErrorKind::Internal => 70,
        }
    }
}
