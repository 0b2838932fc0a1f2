#![allow(dead_code)]

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};

use totp_harness::clock::ManualClock;

/// RFC 4226 / RFC 6238 SHA-1 test key "12345678901234567890" in base32.
pub const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
pub const RFC_KEY: &[u8] = b"12345678901234567890";

/// The demo secret most authenticator tutorials use ("Hello!\xde\xad\xbe\xef").
pub const DEMO_SECRET: &str = "JBSWY3DPEHPK3PXP";

/// 2005-03-18T01:58:29Z, one of the RFC 6238 reference instants.
pub const REFERENCE_SECS: u64 = 1_111_111_109;

pub fn millis(secs: u64) -> u64 {
    secs * 1000
}

pub fn clock_at(secs: u64) -> Arc<ManualClock> {
    Arc::new(ManualClock::new(millis(secs)))
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
