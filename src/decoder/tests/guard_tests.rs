//! Tests for the missing-value guard combinator

use crate::decoder::coders;
use crate::decoder::guard::{guarded, is_null_sentinel};
use crate::models::DecodedValue;

#[test]
fn empty_string_is_null_sentinel() {
    assert!(is_null_sentinel(""));
    assert!(is_null_sentinel("   "));
}

#[test]
fn all_slash_token_is_null_sentinel() {
    assert!(is_null_sentinel("/"));
    assert!(is_null_sentinel("////"));
    assert!(is_null_sentinel("///// "));
}

#[test]
fn partial_slash_token_is_not_null_sentinel() {
    assert!(!is_null_sentinel("0/26"));
    assert!(!is_null_sentinel("0026"));
}

#[test]
fn guarded_rule_yields_missing_for_null_input() {
    let decode = guarded(coders::sign_magnitude_tenths);
    assert_eq!(decode(""), DecodedValue::Missing);
    assert_eq!(decode("////"), DecodedValue::Missing);
}

#[test]
fn guarded_rule_delegates_otherwise() {
    let decode = guarded(coders::sign_magnitude_tenths);
    assert_eq!(decode("0026"), DecodedValue::Number(2.6));
}

#[test]
fn guarded_rule_trims_before_delegating() {
    let decode = guarded(coders::sign_magnitude_tenths);
    assert_eq!(decode(" 0026 "), DecodedValue::Number(2.6));
}

#[test]
fn guard_keeps_passthrough_total() {
    // Without the guard an absent group would decode to empty text
    let decode = guarded(coders::passthrough);
    assert_eq!(decode(""), DecodedValue::Missing);
    assert_eq!(decode("28877"), DecodedValue::Text("28877".to_string()));
}
