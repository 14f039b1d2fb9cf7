//! Verbose diagnostics for successful token operations.
//!
//! The token layer hands a [`TokenDiagnostics`] record to a [`DiagnosticSink`]
//! once the operation has succeeded. Nothing is recorded on a failure path, so
//! intermediate material from a rejected token never reaches a sink.

use tracing::debug;

use crate::crypto::NONCE_LEN;
use crate::payload::WirePayload;

/// Which entry point produced a diagnostics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        }
    }
}

/// Structured fields of one sealed or opened token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDiagnostics {
    pub operation: Operation,
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
    /// Full `nonce || ciphertext || tag` payload.
    pub payload: Vec<u8>,
}

impl TokenDiagnostics {
    pub fn new(operation: Operation, payload: &WirePayload) -> Self {
        Self {
            operation,
            nonce: *payload.nonce(),
            ciphertext: payload.ciphertext().to_vec(),
            tag: payload.tag().to_vec(),
            payload: payload.to_bytes(),
        }
    }
}

/// Receiver for [`TokenDiagnostics`].
///
/// Any `Fn(&TokenDiagnostics)` closure is a sink.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink {
    fn record(&self, diagnostics: &TokenDiagnostics);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&TokenDiagnostics),
{
    fn record(&self, diagnostics: &TokenDiagnostics) {
        self(diagnostics)
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _diagnostics: &TokenDiagnostics) {}
}

/// Emits each record as a `debug` event with hex-encoded fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, d: &TokenDiagnostics) {
        debug!(
            operation = d.operation.as_str(),
            iv = %hex::encode(d.nonce),
            ciphertext = %hex::encode(&d.ciphertext),
            tag = %hex::encode(&d.tag),
            payload = %hex::encode(&d.payload),
            "token diagnostics"
        );
    }
}
