// base32.rs
// RFC 4648 base32 for shared secrets: lenient decoding, unpadded encoding.

use data_encoding::BASE32_NOPAD;

use crate::error::{Result, TotpError};

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decodes a base32 secret as typed by a user or scanned from a QR code.
///
/// Whitespace is ignored and lowercase is accepted. Padding is not expected:
/// trailing bits that do not fill a whole byte are dropped, so the output is
/// always `floor(len * 5 / 8)` bytes long.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for c in input.chars().filter(|c| !c.is_whitespace()) {
        let upper = c.to_ascii_uppercase();
        let index = ALPHABET
            .iter()
            .position(|&a| a as char == upper)
            .ok_or(TotpError::InvalidEncoding { character: c })?;

        buffer = (buffer << 5) | index as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            // keep only the bits not yet emitted
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

/// Encodes raw bytes as unpadded base32, the form authenticator apps accept.
pub fn encode(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}

/// Canonical form of a secret for embedding in URIs: no whitespace, uppercase.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
