// config.rs
// Generation options and the optional environment-driven configuration.
//
// Env vars read by TotpConfig::from_env (a .env file is honoured):
// - TOTP_ISSUER  -> issuer shown by authenticator apps
// - TOTP_DIGITS  -> code length (default 6)
// - TOTP_PERIOD  -> time step in seconds (default 30)
// - TOTP_WINDOW  -> verification drift tolerance in steps (default 1)

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::TotpError;
use crate::hotp::{self, DEFAULT_DIGITS};

pub const DEFAULT_TIME_STEP: u64 = 30;
pub const DEFAULT_WINDOW: u64 = 1;
/// Widest accepted drift tolerance; verification costs 2 * window + 1 HMACs.
pub const MAX_WINDOW: u64 = 10;
pub const DEFAULT_ISSUER: &str = "totp-harness";

/// Parameters shared by generation and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotpOptions {
    /// Seconds a code stays valid.
    pub time_step: u64,
    pub digits: u32,
    /// Steps accepted on either side of the current one when verifying.
    pub window: u64,
}

impl Default for TotpOptions {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            digits: DEFAULT_DIGITS,
            window: DEFAULT_WINDOW,
        }
    }
}

impl TotpOptions {
    pub fn validate(&self) -> crate::Result<()> {
        if self.time_step == 0 {
            return Err(TotpError::InvalidParameter {
                name: "time_step",
                value: self.time_step,
            });
        }
        if self.window > MAX_WINDOW {
            return Err(TotpError::InvalidParameter {
                name: "window",
                value: self.window,
            });
        }
        hotp::check_digits(self.digits)
    }

    pub fn with_window(mut self, window: u64) -> Self {
        self.window = window;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
    pub issuer: String,
    #[serde(flatten)]
    pub options: TotpOptions,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            options: TotpOptions::default(),
        }
    }
}

impl TotpConfig {
    /// Loads `.env` if present, then reads the TOTP_* variables.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(issuer) = lookup("TOTP_ISSUER") {
            config.issuer = issuer;
        }
        if let Some(raw) = lookup("TOTP_DIGITS") {
            config.options.digits = raw
                .trim()
                .parse()
                .with_context(|| format!("TOTP_DIGITS is not a number: {raw:?}"))?;
        }
        if let Some(raw) = lookup("TOTP_PERIOD") {
            config.options.time_step = raw
                .trim()
                .parse()
                .with_context(|| format!("TOTP_PERIOD is not a number: {raw:?}"))?;
        }
        if let Some(raw) = lookup("TOTP_WINDOW") {
            config.options.window = raw
                .trim()
                .parse()
                .with_context(|| format!("TOTP_WINDOW is not a number: {raw:?}"))?;
        }

        config
            .options
            .validate()
            .context("invalid TOTP configuration")?;
        Ok(config)
    }
}
