//! Missing-value guard for value coders
//!
//! FM-12 marks untransmitted values either by omitting the whole group or
//! by filling digit positions with the `/` sentinel. Wrapping every coder
//! in [`guarded`] makes each one total over its domain and keeps the
//! missing-value branching out of the coders themselves.

use crate::constants::NULL_SENTINEL;
use crate::models::DecodedValue;

/// True if a raw token denotes "value not transmitted": the empty string
/// (group absent or sub-grammar mismatch) or a token wholly composed of
/// the null sentinel character.
pub fn is_null_sentinel(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.chars().all(|c| c == NULL_SENTINEL)
}

/// Wrap a decoding rule so that null-sentinel input yields the canonical
/// missing marker and anything else is delegated, trimmed, to the rule.
pub fn guarded<F>(rule: F) -> impl Fn(&str) -> DecodedValue
where
    F: Fn(&str) -> DecodedValue,
{
    move |raw: &str| {
        if is_null_sentinel(raw) {
            DecodedValue::Missing
        } else {
            rule(raw.trim())
        }
    }
}
