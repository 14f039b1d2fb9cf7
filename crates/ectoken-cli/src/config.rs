//! Configuration loading and validation for the `ectoken` CLI.
//!
//! Values come from two layers, later layers winning:
//! 1. `ECTOKEN_`-prefixed environment variables (`ECTOKEN_KEY`,
//!    `ECTOKEN_LOG_LEVEL`, `ECTOKEN_LOG_JSON`).
//! 2. Command-line flags.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Command-line flags.
#[derive(Parser, Debug, Default)]
#[command(name = "ectoken", version, about = "Issue and verify version 3 edge tokens")]
pub struct Cli {
    /// Shared token key (alphanumeric). Falls back to `ECTOKEN_KEY`.
    #[arg(long)]
    pub key: Option<String>,

    /// Query-string parameters to encrypt.
    #[arg(long)]
    pub params: Option<String>,

    /// Token to decrypt.
    #[arg(long)]
    pub token: Option<String>,

    /// Decrypt `--token` instead of encrypting `--params`.
    #[arg(long, default_value_t = false)]
    pub decrypt: bool,

    /// Print a hex dump of the nonce, ciphertext and tag.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Tracing filter for stderr logs (e.g. `"warn"`, `"ectoken=debug"`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit stderr logs as JSON lines.
    #[arg(long, default_value_t = false)]
    pub log_json: bool,
}

/// Settings read from the environment.
#[derive(Clone, Deserialize)]
pub struct EnvConfig {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "warn".into()
}

impl EnvConfig {
    /// Load settings from `ECTOKEN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix("ECTOKEN"))
    }

    /// Load settings from an environment source.
    ///
    /// Values stay strings until deserialised, so a key such as `00123` is
    /// kept byte-for-byte.
    fn from_source(source: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(source)
            .build()
            .context("failed to build configuration from environment")?;

        cfg.try_deserialize()
            .context("failed to deserialise configuration")
    }
}

/// What the CLI has been asked to do.
#[derive(Clone, PartialEq, Eq)]
pub enum Mode {
    Encrypt { params: String },
    Decrypt { token: String },
}

/// Validated, merged configuration.
#[derive(Clone)]
pub struct Settings {
    pub key: String,
    pub mode: Mode,
    pub verbose: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Settings {
    /// Parse flags, read the environment, and merge them.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment is unreadable or the merged
    /// settings fail validation.
    pub fn load() -> Result<Self> {
        let cli = Cli::parse();
        let env = EnvConfig::from_env()?;
        Self::merge(cli, env)
    }

    /// Merge flags over environment values and validate the result.
    ///
    /// Missing key, params or token are passed through as empty strings so the
    /// token engine reports them with its own error kinds.
    pub fn merge(cli: Cli, env: EnvConfig) -> Result<Self> {
        validate(&cli)?;

        let mode = if cli.decrypt {
            Mode::Decrypt {
                token: cli.token.unwrap_or_default(),
            }
        } else {
            Mode::Encrypt {
                params: cli.params.unwrap_or_default(),
            }
        };

        let settings = Self {
            key: cli.key.or(env.key).unwrap_or_default(),
            mode,
            verbose: cli.verbose,
            log_level: cli.log_level.unwrap_or(env.log_level),
            log_json: cli.log_json || env.log_json,
        };

        if settings.log_level.trim().is_empty() {
            anyhow::bail!("log level must not be empty");
        }
        Ok(settings)
    }
}

fn validate(cli: &Cli) -> Result<()> {
    if cli.decrypt && cli.params.is_some() {
        anyhow::bail!("--params cannot be combined with --decrypt");
    }
    if !cli.decrypt && cli.token.is_some() {
        anyhow::bail!("--token requires --decrypt");
    }
    Ok(())
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.mode {
            Mode::Encrypt { .. } => "encrypt",
            Mode::Decrypt { .. } => "decrypt",
        };
        f.debug_struct("Settings")
            .field("key", &"[REDACTED]")
            .field("mode", &mode)
            .field("verbose", &self.verbose)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}
