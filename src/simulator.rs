// simulator.rs
// Several enrolled accounts behind one authenticator, keyed by account name.

use rand::Rng;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::TotpOptions;
use crate::error::{Result, TotpError};
use crate::scenario::TotpScenario;
use crate::secrets::{DEFAULT_SECRET_LENGTH, generate_random_secret};

/// In-memory account registry. Not synchronized: give each test worker its own.
pub struct AuthenticatorSimulator {
    accounts: BTreeMap<String, TotpScenario>,
    options: TotpOptions,
    clock: Arc<dyn Clock>,
}

impl Default for AuthenticatorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthenticatorSimulator {
    pub fn new() -> Self {
        Self::with_clock(TotpOptions::default(), Arc::new(SystemClock))
    }

    /// All accounts share `options` and `clock`.
    pub fn with_clock(options: TotpOptions, clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: BTreeMap::new(),
            options,
            clock,
        }
    }

    /// Registers `name`, replacing any earlier registration under the same name.
    /// Without a secret a random one is drawn from `rand::rng()`.
    pub fn add_account(&mut self, name: &str, secret: Option<&str>) -> Result<()> {
        match secret {
            Some(secret) => self.register(name, secret.to_string()),
            None => self.add_account_with_rng(name, &mut rand::rng()),
        }
    }

    pub fn add_account_with_rng<R: Rng + ?Sized>(
        &mut self,
        name: &str,
        rng: &mut R,
    ) -> Result<()> {
        let secret = generate_random_secret(rng, DEFAULT_SECRET_LENGTH);
        self.register(name, secret)
    }

    fn register(&mut self, name: &str, secret: String) -> Result<()> {
        let scenario = TotpScenario::with_clock(secret, self.options, Arc::clone(&self.clock))?;
        if self.accounts.insert(name.to_string(), scenario).is_some() {
            debug!(account = name, "replaced simulator account");
        } else {
            debug!(account = name, "added simulator account");
        }
        Ok(())
    }

    /// Returns whether the account existed.
    pub fn remove_account(&mut self, name: &str) -> bool {
        let removed = self.accounts.remove(name).is_some();
        if removed {
            debug!(account = name, "removed simulator account");
        }
        removed
    }

    pub fn account(&self, name: &str) -> Option<&TotpScenario> {
        self.accounts.get(name)
    }

    pub fn code(&self, name: &str) -> Result<String> {
        self.accounts
            .get(name)
            .ok_or_else(|| TotpError::NotFound {
                account: name.to_string(),
            })?
            .current_code()
    }

    /// Current code of every account, keyed by account name.
    pub fn all_codes(&self) -> Result<BTreeMap<String, String>> {
        self.accounts
            .iter()
            .map(|(name, scenario)| Ok((name.clone(), scenario.current_code()?)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Account names in sorted order.
    pub fn account_names(&self) -> Vec<String> {
        self.accounts.keys().cloned().collect()
    }
}
