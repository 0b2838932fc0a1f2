#[path = "common/mod.rs"]
mod common;

use totp_harness::TotpError;
use totp_harness::base32::{decode, encode, normalize};

#[test]
fn decodes_demo_secret() {
    let bytes = decode(common::DEMO_SECRET).unwrap();
    assert_eq!(bytes, b"Hello!\xde\xad\xbe\xef");
}

#[test]
fn decoding_ignores_case_and_whitespace() {
    assert_eq!(decode("jbsw y3dp").unwrap(), decode("JBSWY3DP").unwrap());
    assert_eq!(decode(" JBSW\tY3DP\nEHPK 3PXP ").unwrap(), decode(common::DEMO_SECRET).unwrap());
}

#[test]
fn rejects_characters_outside_alphabet() {
    let err = decode("JBSW1390").unwrap_err();
    assert_eq!(err, TotpError::InvalidEncoding { character: '1' });
    assert!(err.to_string().contains("'1'"));

    // padding is not part of the accepted input
    assert!(matches!(
        decode("MZXW6==="),
        Err(TotpError::InvalidEncoding { character: '=' })
    ));
}

#[test]
fn drops_incomplete_trailing_bits() {
    assert_eq!(decode("MZXW6").unwrap(), b"foo");
    assert_eq!(decode("MZXW6YQ").unwrap(), b"foob");
    assert_eq!(decode("MZXW6YTB").unwrap(), b"fooba");
    // a lone character carries only 5 bits
    assert!(decode("M").unwrap().is_empty());
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn decoded_length_follows_five_eighths_rule() {
    let input = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
    for len in 0..=input.len() {
        assert_eq!(decode(&input[..len]).unwrap().len(), len * 5 / 8, "len {len}");
    }
}

#[test]
fn encode_matches_decoder() {
    assert_eq!(encode(b"12345678901234567890"), common::RFC_SECRET);
    assert_eq!(decode(&encode(common::RFC_KEY)).unwrap(), common::RFC_KEY);
}

#[test]
fn normalize_strips_whitespace_and_uppercases() {
    assert_eq!(normalize("jbsw y3dp\tehpk 3pxp"), common::DEMO_SECRET);
}
