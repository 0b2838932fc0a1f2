// provisioning.rs
// otpauth:// URIs that authenticator apps import from a QR code.

use crate::base32;
use crate::config::TotpOptions;

/// Builds `otpauth://totp/<issuer:account>?secret=..&issuer=..&algorithm=SHA1&digits=..&period=..`.
///
/// The label is percent-encoded as a whole, so its `:` separator becomes `%3A`.
pub fn provisioning_uri(
    secret: &str,
    account_name: &str,
    issuer: &str,
    options: &TotpOptions,
) -> String {
    let label = format!("{issuer}:{account_name}");
    format!(
        "otpauth://totp/{}?secret={}&issuer={}&algorithm=SHA1&digits={}&period={}",
        urlencoding::encode(&label),
        base32::normalize(secret),
        urlencoding::encode(issuer),
        options.digits,
        options.time_step
    )
}
