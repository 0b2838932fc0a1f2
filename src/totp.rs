// totp.rs
// Time-based one-time passwords (RFC 6238): generation and drift-tolerant verification.

use tracing::debug;

use crate::base32;
use crate::clock::{Clock, SystemClock};
use crate::config::TotpOptions;
use crate::error::{Result, TotpError};
use crate::hotp;

/// Time step index for a Unix timestamp in milliseconds.
pub fn counter_at(at_millis: u64, time_step: u64) -> Result<u64> {
    if time_step == 0 {
        return Err(TotpError::InvalidParameter {
            name: "time_step",
            value: time_step,
        });
    }
    Ok(at_millis / 1000 / time_step)
}

/// Whole seconds until the code valid at `at_millis` rolls over.
pub fn seconds_remaining(at_millis: u64, time_step: u64) -> Result<u64> {
    counter_at(at_millis, time_step)?;
    Ok(time_step - (at_millis / 1000) % time_step)
}

/// Generates the code for `secret` at `at_millis`, or at the current time when `None`.
pub fn generate(secret: &str, at_millis: Option<u64>, options: &TotpOptions) -> Result<String> {
    options.validate()?;
    let key = base32::decode(secret)?;
    let at = at_millis.unwrap_or_else(|| SystemClock.now_millis());
    hotp::generate(&key, counter_at(at, options.time_step)?, options.digits)
}

/// Checks `candidate` against the steps within `options.window` of `at_millis`.
///
/// A wrong code is `Ok(false)`; only malformed secrets or options are errors.
/// There is no replay protection: a code that matched once keeps matching
/// until it drifts out of the window.
pub fn verify(
    secret: &str,
    candidate: &str,
    at_millis: Option<u64>,
    options: &TotpOptions,
) -> Result<bool> {
    Ok(verify_offset(secret, candidate, at_millis, options)?.is_some())
}

/// Like [`verify`], but reports which step offset matched (`-1` is the previous
/// step). Callers that need single-use codes can record `counter + offset`.
pub fn verify_offset(
    secret: &str,
    candidate: &str,
    at_millis: Option<u64>,
    options: &TotpOptions,
) -> Result<Option<i64>> {
    options.validate()?;
    let key = base32::decode(secret)?;
    let at = at_millis.unwrap_or_else(|| SystemClock.now_millis());
    let counter = counter_at(at, options.time_step)?;
    // validate() caps the window, so these conversions are lossless
    let window = options.window as i64;
    // steps before the epoch do not exist
    let earliest = options.window.min(counter) as i64;

    for offset in -earliest..=window {
        let Some(step) = counter.checked_add_signed(offset) else {
            break;
        };
        if hotp::generate(&key, step, options.digits)? == candidate {
            debug!(offset, "TOTP code matched");
            return Ok(Some(offset));
        }
    }

    debug!(window = options.window, "TOTP code did not match any step in window");
    Ok(None)
}
