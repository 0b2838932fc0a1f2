// lib.rs
// TOTP (RFC 6238) generation and verification, plus the provisioning and
// simulation helpers used to drive MFA flows in end-to-end tests.
//
// Modules:
// - base32       -> secret decoding (lenient) and encoding
// - hotp         -> RFC 4226 codes over raw key bytes
// - totp         -> time-stepped codes and windowed verification
// - secrets      -> random secrets and backup codes
// - provisioning -> otpauth:// URIs
// - scenario     -> one account: current/expired/future codes
// - simulator    -> many accounts keyed by name
// - config       -> options and env-driven configuration
// - clock        -> injectable wall clock

pub mod base32;
pub mod clock;
pub mod config;
pub mod error;
pub mod hotp;
pub mod provisioning;
pub mod scenario;
pub mod secrets;
pub mod simulator;
pub mod totp;

pub use config::{TotpConfig, TotpOptions};
pub use error::{Result, TotpError};
pub use scenario::TotpScenario;
pub use simulator::AuthenticatorSimulator;
