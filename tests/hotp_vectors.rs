#[path = "common/mod.rs"]
mod common;

use totp_harness::TotpError;
use totp_harness::hotp::{MAX_DIGITS, generate, truncate};

// RFC 4226 Appendix D
const RFC4226_CODES: [&str; 10] = [
    "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583", "399871",
    "520489",
];

#[test]
fn matches_rfc4226_reference_codes() {
    for (counter, expected) in RFC4226_CODES.iter().enumerate() {
        let code = generate(common::RFC_KEY, counter as u64, 6).unwrap();
        assert_eq!(&code, expected, "counter {counter}");
    }
}

#[test]
fn truncation_matches_rfc4226_example() {
    // RFC 4226 section 5.4: offset 10, DBC 0x50ef7f19
    let digest: [u8; 20] = [
        0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
        0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
    ];
    assert_eq!(truncate(&digest), 0x50ef_7f19);
    assert_eq!(truncate(&digest) % 1_000_000, 872_921);
}

#[test]
fn truncation_clears_the_sign_bit() {
    let mut digest = [0xffu8; 20];
    digest[19] = 0xf0; // offset 0
    assert_eq!(truncate(&digest), 0x7fff_ffff);
}

#[test]
fn pads_codes_to_requested_digits() {
    let demo = totp_harness::base32::decode(common::DEMO_SECRET).unwrap();
    assert_eq!(generate(&demo, 134, 6).unwrap(), "008210");
    assert_eq!(generate(common::RFC_KEY, 1, 10).unwrap(), "1094287082");
    assert_eq!(generate(common::RFC_KEY, 1, 8).unwrap(), "94287082");
    assert_eq!(generate(common::RFC_KEY, 1, 1).unwrap(), "2");
}

#[test]
fn rejects_out_of_range_digits() {
    assert_eq!(
        generate(common::RFC_KEY, 0, 0).unwrap_err(),
        TotpError::InvalidParameter { name: "digits", value: 0 }
    );
    assert!(matches!(
        generate(common::RFC_KEY, 0, MAX_DIGITS + 1),
        Err(TotpError::InvalidParameter { name: "digits", .. })
    ));
}

#[test]
fn accepts_any_key_length_and_extreme_counters() {
    assert_eq!(generate(&[], 0, 6).unwrap().len(), 6);
    let demo = totp_harness::base32::decode(common::DEMO_SECRET).unwrap();
    assert_eq!(generate(&demo, u64::MAX, 6).unwrap(), "939986");
}
