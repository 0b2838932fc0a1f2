// error.rs
// Error kinds for decoding, parameter validation, and simulator lookups.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TotpError {
    /// The secret contains a character outside the RFC 4648 base32 alphabet.
    #[error("invalid base32 character {character:?} in secret")]
    InvalidEncoding { character: char },

    /// A generation parameter is out of range (zero time step, zero digits, ...).
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: u64 },

    /// The simulator has no account registered under this name.
    #[error("no account registered as {account:?}")]
    NotFound { account: String },
}

pub type Result<T, E = TotpError> = std::result::Result<T, E>;
