// hotp.rs
// HMAC-based one-time passwords (RFC 4226) over raw secret bytes.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{Result, TotpError};

type HmacSha1 = Hmac<Sha1>;

pub const DEFAULT_DIGITS: u32 = 6;
/// The truncated value fits in 31 bits, so more than 10 digits adds nothing.
pub const MAX_DIGITS: u32 = 10;

/// Computes the HOTP code for `counter`, zero-padded to exactly `digits` characters.
pub fn generate(secret: &[u8], counter: u64, digits: u32) -> Result<String> {
    check_digits(digits)?;

    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(&counter.to_be_bytes());
    let digest: [u8; 20] = mac.finalize().into_bytes().into();

    let code = u64::from(truncate(&digest)) % 10u64.pow(digits);
    Ok(format!("{:0width$}", code, width = digits as usize))
}

/// Dynamic truncation (RFC 4226 section 5.3): a 31-bit value read at the
/// offset named by the low nibble of the last digest byte.
pub fn truncate(digest: &[u8; 20]) -> u32 {
    let offset = (digest[19] & 0x0F) as usize;
    let mut window = [0u8; 4];
    window.copy_from_slice(&digest[offset..offset + 4]);
    u32::from_be_bytes(window) & 0x7FFF_FFFF
}

pub(crate) fn check_digits(digits: u32) -> Result<()> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(TotpError::InvalidParameter {
            name: "digits",
            value: u64::from(digits),
        });
    }
    Ok(())
}
