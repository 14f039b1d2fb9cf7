//! Version 3 token issue and verification.
//!
//! ```text
//! encrypt: validate key + params → derive → nonce → seal → payload → encode
//! decrypt: validate key → derive → decode → payload → open
//! ```

use tracing::debug;

use crate::codec;
use crate::crypto::{derive_key, generate_nonce, open, seal, CipherError, NONCE_LEN};
use crate::diagnostics::{DiagnosticSink, NoopSink, Operation, TokenDiagnostics, TracingSink};
use crate::error::TokenError;
use crate::payload::WirePayload;
use crate::validate::{validate_key, validate_params};

/// Encrypt `params` into a URL-safe token.
///
/// With `verbose` set, the nonce, ciphertext, tag and payload are emitted as a
/// `debug` tracing event after sealing succeeds.
///
/// # Errors
///
/// Returns [`TokenError::InvalidKey`] or [`TokenError::ParamLength`] before any
/// cryptographic work if the inputs are out of range.
pub fn encrypt(key: &str, params: &str, verbose: bool) -> Result<String, TokenError> {
    encrypt_with_sink(key, params, select_sink(verbose))
}

/// Decrypt `token` back to its parameter string.
///
/// A plaintext that is not UTF-8 is converted lossily; use [`decrypt_bytes`]
/// for the raw bytes.
///
/// # Errors
///
/// Returns [`TokenError::InvalidKey`] for a bad key, [`TokenError::Format`] if
/// the token is not decodable, and [`TokenError::Authentication`] if it was not
/// sealed under `key` or has been altered.
pub fn decrypt(key: &str, token: &str, verbose: bool) -> Result<String, TokenError> {
    decrypt_with_sink(key, token, select_sink(verbose))
}

/// Decrypt `token` to the exact plaintext bytes.
///
/// # Errors
///
/// Same as [`decrypt`].
pub fn decrypt_bytes(key: &str, token: &str, verbose: bool) -> Result<Vec<u8>, TokenError> {
    decrypt_bytes_with_sink(key, token, select_sink(verbose))
}

/// [`encrypt`] reporting diagnostics to `sink` on success.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn encrypt_with_sink(
    key: &str,
    params: &str,
    sink: &dyn DiagnosticSink,
) -> Result<String, TokenError> {
    validate_key(key)?;
    validate_params(params.as_bytes())?;

    let derived = derive_key(key);
    let nonce = generate_nonce();
    let sealed = seal(&derived, &nonce, params.as_bytes()).map_err(TokenError::Internal)?;
    let payload = assemble(nonce, sealed)?;

    sink.record(&TokenDiagnostics::new(Operation::Encrypt, &payload));

    let token = codec::encode(&payload.to_bytes());
    debug!(
        params_len = params.len(),
        token_len = token.len(),
        "token encrypted"
    );
    Ok(token)
}

/// [`decrypt`] reporting diagnostics to `sink` on success.
///
/// # Errors
///
/// Same as [`decrypt`].
pub fn decrypt_with_sink(
    key: &str,
    token: &str,
    sink: &dyn DiagnosticSink,
) -> Result<String, TokenError> {
    let params = decrypt_bytes_with_sink(key, token, sink)?;
    Ok(match String::from_utf8(params) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// [`decrypt_bytes`] reporting diagnostics to `sink` on success.
///
/// # Errors
///
/// Same as [`decrypt`].
pub fn decrypt_bytes_with_sink(
    key: &str,
    token: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<u8>, TokenError> {
    validate_key(key)?;

    let derived = derive_key(key);
    let payload = codec::decode(token)
        .and_then(|raw| WirePayload::from_bytes(&raw))
        .map_err(|e| {
            debug!(token_len = token.len(), error = %e, "token rejected");
            e
        })?;

    let params = open(&derived, payload.nonce(), payload.sealed()).map_err(|e| match e {
        CipherError::AeadFailure => {
            debug!(payload_len = payload.len(), "token failed authentication");
            TokenError::Authentication
        }
        other => TokenError::Internal(other),
    })?;

    sink.record(&TokenDiagnostics::new(Operation::Decrypt, &payload));
    debug!(params_len = params.len(), "token decrypted");
    Ok(params)
}

/// Pair a fresh nonce with sealed output. A `sealed` shorter than the tag is an
/// internal fault.
fn assemble(nonce: [u8; NONCE_LEN], sealed: Vec<u8>) -> Result<WirePayload, TokenError> {
    WirePayload::from_parts(nonce, sealed)
        .map_err(|_| TokenError::Internal(CipherError::AeadFailure))
}

fn select_sink(verbose: bool) -> &'static dyn DiagnosticSink {
    if verbose {
        &TracingSink
    } else {
        &NoopSink
    }
}
