//! `ectoken`: CLI entry point.
//!
//! Startup sequence:
//! 1. Parse flags and merge them over `ECTOKEN_*` environment variables.
//! 2. Initialise stderr logging.
//! 3. Encrypt `--params` or decrypt `--token`, printing the result to stdout.
//!
//! Token errors exit with [`ectoken::TokenError::exit_code`]; configuration
//! errors exit with status 1.

mod config;
mod report;
mod telemetry;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use ectoken::TokenError;
use tracing::debug;

use config::{Mode, Settings};
use report::Capture;

fn main() -> Result<ExitCode> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let settings = Settings::load().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&settings.log_level, settings.log_json)?;
    debug!(settings = ?settings, "ectoken starting");

    // -----------------------------------------------------------------------
    // 3. Token operation
    // -----------------------------------------------------------------------
    match run(&settings) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<TokenError>() {
            Some(token_err) => Ok(ExitCode::from(report_token_failure(token_err))),
            None => Err(e),
        },
    }
}

/// Print a token error once on stderr and return its exit code. The log event
/// is `debug` so the default level does not repeat the message.
fn report_token_failure(err: &TokenError) -> u8 {
    debug!(kind = ?err.kind(), "token operation failed");
    eprintln!("{err}");
    err.exit_code()
}

fn run(settings: &Settings) -> Result<()> {
    let capture = Capture::default();
    let mut stdout = std::io::stdout().lock();

    match &settings.mode {
        Mode::Encrypt { params } => {
            let token = ectoken::encrypt_with_sink(&settings.key, params, &capture)?;
            if settings.verbose {
                if let Some(d) = capture.take() {
                    write!(stdout, "{}", report::render(&d, None))?;
                }
            }
            write!(stdout, "{token}").context("failed to write token")?;
        }
        Mode::Decrypt { token } => {
            let params = ectoken::decrypt_with_sink(&settings.key, token, &capture)?;
            if settings.verbose {
                if let Some(d) = capture.take() {
                    write!(stdout, "{}", report::render(&d, Some(&params)))?;
                }
            }
            writeln!(stdout, "{params}").context("failed to write params")?;
        }
    }

    stdout.flush()?;
    Ok(())
}
