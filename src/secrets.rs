// secrets.rs
// Provisioning helpers: random Base32 secrets and backup codes.
//
// Every generator takes its random source from the caller. `rand::rng()` is a
// CSPRNG and is what production call sites should pass; tests pass a seeded StdRng.

use rand::{Rng, RngCore};

use crate::base32::{self, ALPHABET};

pub const DEFAULT_SECRET_LENGTH: usize = 32; // characters, i.e. 160 bits
pub const MIN_SECRET_BYTES: usize = 16; // 128 bits (mandatory minimum)
pub const DEFAULT_SECRET_BYTES: usize = 20; // 160 bits (recommended)
pub const DEFAULT_BACKUP_CODE_COUNT: usize = 10;

const BACKUP_CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const BACKUP_CODE_HALF: usize = 4;

/// Draws `length` independent characters from the base32 alphabet.
pub fn generate_random_secret<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates `count` backup codes shaped `XXXX-XXXX` (uppercase letters and digits).
///
/// Codes are drawn independently; duplicates within a batch are not filtered.
pub fn generate_backup_codes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| backup_code(rng)).collect()
}

fn backup_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(BACKUP_CODE_HALF * 2 + 1);
    for i in 0..BACKUP_CODE_HALF * 2 {
        if i == BACKUP_CODE_HALF {
            code.push('-');
        }
        code.push(BACKUP_CODE_ALPHABET[rng.random_range(0..BACKUP_CODE_ALPHABET.len())] as char);
    }
    code
}

/// Unpadded Base32 encoding of `bytes` random key bytes, raised to 128 bits when shorter.
pub fn generate_base32_secret_n<R: RngCore + ?Sized>(rng: &mut R, bytes: usize) -> String {
    let mut key = vec![0u8; bytes.max(MIN_SECRET_BYTES)];
    rng.fill_bytes(&mut key);
    base32::encode(&key)
}
