//! Input checks run before any cryptographic work.

use crate::error::TokenError;

/// Maximum plaintext length in bytes.
pub const MAX_PARAMS_LEN: usize = 512;

/// Reject empty keys and keys with any character outside `[A-Za-z0-9]`.
///
/// # Errors
///
/// Returns [`TokenError::InvalidKey`] on violation.
pub fn validate_key(key: &str) -> Result<(), TokenError> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TokenError::InvalidKey);
    }
    Ok(())
}

/// Reject plaintexts that are empty or longer than [`MAX_PARAMS_LEN`] bytes.
///
/// # Errors
///
/// Returns [`TokenError::ParamLength`] on violation.
pub fn validate_params(params: &[u8]) -> Result<(), TokenError> {
    let len = params.len();
    if len == 0 || len > MAX_PARAMS_LEN {
        return Err(TokenError::ParamLength { len });
    }
    Ok(())
}
