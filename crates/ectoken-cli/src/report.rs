//! Boxed hexadecimal dump printed in `--verbose` mode.

use std::cell::RefCell;

use ectoken::{DiagnosticSink, TokenDiagnostics};

const RULE: &str = "+-------------------------------------------------------------";

/// Keeps the last diagnostics record so it can be printed after the operation
/// returns.
#[derive(Default)]
pub struct Capture(RefCell<Option<TokenDiagnostics>>);

impl Capture {
    pub fn take(&self) -> Option<TokenDiagnostics> {
        self.0.borrow_mut().take()
    }
}

impl DiagnosticSink for Capture {
    fn record(&self, diagnostics: &TokenDiagnostics) {
        *self.0.borrow_mut() = Some(diagnostics.clone());
    }
}

/// Render the dump. Encrypt shows the full payload as `token`; decrypt shows
/// the recovered `params`.
pub fn render(d: &TokenDiagnostics, params: Option<&str>) -> String {
    let mut lines = vec![
        RULE.to_string(),
        row("iv", &hex::encode(d.nonce)),
        row("cipherText", &hex::encode(&d.ciphertext)),
        row("tag", &hex::encode(&d.tag)),
        RULE.to_string(),
    ];
    match params {
        Some(p) => lines.push(row("params", p)),
        None => lines.push(row("token", &hex::encode(&d.payload))),
    }
    lines.push(RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn row(label: &str, value: &str) -> String {
    format!("| {:<19}{value}", format!("{label}:"))
}
