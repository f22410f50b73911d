//! Group sub-splitters for SYNOP code groups
//!
//! A code group that packs several variables into its five characters is
//! decomposed here into named sub-fields before the value coders run.
//! Each sub-grammar is wrapped in an outer optional so matching never
//! fails: a token that does not fit (for example one that is wholly the
//! `/` sentinel) simply yields the empty string for every sub-field,
//! which the missing-value guard then resolves to the missing marker.

use std::sync::LazyLock;

use regex::Regex;

use crate::decoder::guard;
use crate::models::DecodedValue;

/// iihVV: precipitation indicator, weather indicator, cloud base band,
/// visibility code
pub static IIHVV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<ir>\d)(?P<ix>\d)(?P<h>[\d/])(?P<VV>[\d/]{2}))?")
        .expect("iihVV sub-grammar is valid")
});

/// Nddff: total cloud cover, wind direction, wind speed
pub static NDDFF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<N>[\d/])(?P<dd>\d{2})(?P<ff>\d{2}))?")
        .expect("Nddff sub-grammar is valid")
});

/// 5appp: pressure tendency characteristic and amount
pub static APPP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<a>\d)(?P<ppp>\d{3}))?").expect("appp sub-grammar is valid")
});

/// 6RRRt: precipitation amount and reference period. Shared by sections
/// 1, 3 and 5, which all transmit the group with the same encoding.
pub static RRRT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<RRR>\d{3})(?P<t>[\d/]))?").expect("RRRt sub-grammar is valid")
});

/// 7wwWW: present weather and two past weather codes
pub static WWWW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<ww>\d{2})(?P<W1>[\d/])(?P<W2>[\d/]))?")
        .expect("wwWW sub-grammar is valid")
});

/// 8NCCC: low cloud amount and cloud genus by level
pub static NCCC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<N>\d)(?P<CL>[\d/])(?P<CM>[\d/])(?P<CH>[\d/]))?")
        .expect("NCCC sub-grammar is valid")
});

/// 4Esss: state of ground with snow cover, snow depth
pub static ESSS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<E>[\d/])(?P<sss>\d{3}))?").expect("Esss sub-grammar is valid")
});

/// EsTT: state of ground, signed whole-degree ground temperature
/// (section 5 national groups 1 and 3)
pub static ESTT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<E>\d)(?P<sTT>\d{3}))?").expect("EsTT sub-grammar is valid")
});

/// Run of up to four section-3 cloud layer groups, leading 8s included
pub static NCHH_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((8(?P<c1>\d[\d/]\d{2})\s*)?(8(?P<c2>\d[\d/]\d{2})\s*)?(8(?P<c3>\d[\d/]\d{2})\s*)?(8(?P<c4>\d[\d/]\d{2})\s*)?)?",
    )
    .expect("NChh run sub-grammar is valid")
});

/// One cloud layer: amount, genus, height code
pub static NCHH_LAYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?P<N>\d)(?P<C>[\d/])(?P<hh>\d{2}))?")
        .expect("NChh layer sub-grammar is valid")
});

/// Named sub-fields of one code group.
///
/// Every lookup degrades to the empty string rather than failing, so a
/// composite coder can decode each sub-field independently of whether its
/// siblings, or the group as a whole, matched.
pub struct SubFields<'a> {
    caps: Option<regex::Captures<'a>>,
}

impl<'a> SubFields<'a> {
    /// Match a raw token against a group sub-grammar
    pub fn split(re: &Regex, token: &'a str) -> Self {
        Self {
            caps: re.captures(token),
        }
    }

    /// Raw sub-token for a named sub-field, empty string when unmatched
    pub fn get(&self, name: &str) -> &'a str {
        self.caps
            .as_ref()
            .and_then(|c| c.name(name))
            .map(|m| m.as_str())
            .unwrap_or("")
    }

    /// Decode a named sub-field with a coder, guarded for missing values
    pub fn decode<F>(&self, name: &str, coder: F) -> DecodedValue
    where
        F: Fn(&str) -> DecodedValue,
    {
        guard::guarded(coder)(self.get(name))
    }
}
