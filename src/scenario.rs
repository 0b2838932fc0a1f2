// scenario.rs
// One enrolled account as an authenticator app would see it, for driving MFA test flows.

use std::sync::Arc;

use crate::base32;
use crate::clock::{Clock, SystemClock};
use crate::config::TotpOptions;
use crate::error::Result;
use crate::provisioning;
use crate::totp;

/// Code that the scenarios treat as wrong. It can still be a real code by coincidence
/// (one step in a million), so tests asserting rejection should compare against
/// `current_code()` first.
pub const INVALID_CODE: &str = "000000";

/// How far `expired_code` and `future_code` sit from now.
pub const DRIFT_MILLIS: u64 = 2 * 60 * 1000;

#[derive(Clone)]
pub struct TotpScenario {
    secret: String,
    options: TotpOptions,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TotpScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the secret stays out of debug output
        f.debug_struct("TotpScenario")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl TotpScenario {
    /// Scenario on the system clock with default options.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        Self::with_clock(secret, TotpOptions::default(), Arc::new(SystemClock))
    }

    /// Rejects secrets that do not decode and options that cannot generate codes.
    pub fn with_clock(
        secret: impl Into<String>,
        options: TotpOptions,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let secret = secret.into();
        base32::decode(&secret)?;
        options.validate()?;
        Ok(Self {
            secret,
            options,
            clock,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn options(&self) -> &TotpOptions {
        &self.options
    }

    pub fn current_code(&self) -> Result<String> {
        self.code_at(self.clock.now_millis())
    }

    pub fn code_at(&self, at_millis: u64) -> Result<String> {
        totp::generate(&self.secret, Some(at_millis), &self.options)
    }

    /// Code from two minutes ago: outside the default window, so it must be rejected.
    pub fn expired_code(&self) -> Result<String> {
        self.code_at(self.clock.now_millis().saturating_sub(DRIFT_MILLIS))
    }

    /// Code from two minutes ahead, as produced by a fast device clock.
    pub fn future_code(&self) -> Result<String> {
        self.code_at(self.clock.now_millis().saturating_add(DRIFT_MILLIS))
    }

    pub fn invalid_code(&self) -> &'static str {
        INVALID_CODE
    }

    pub fn verify(&self, code: &str) -> Result<bool> {
        totp::verify(&self.secret, code, Some(self.clock.now_millis()), &self.options)
    }

    pub fn seconds_remaining(&self) -> Result<u64> {
        totp::seconds_remaining(self.clock.now_millis(), self.options.time_step)
    }

    pub fn provisioning_uri(&self, account_name: &str, issuer: &str) -> String {
        provisioning::provisioning_uri(&self.secret, account_name, issuer, &self.options)
    }
}
