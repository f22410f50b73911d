//! Section splitting for raw SYNOP reports
//!
//! The top level of the cascading grammar: one compiled pattern locates
//! the report header and carves out the optional runs of 5-character
//! groups belonging to sections 1, 3 and 5. A report whose header does
//! not match is undecodable, because no other section boundary can be
//! located without it.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Section;
use crate::{Error, Result};

/// Top-level report grammar. Anchored: the header must open the report.
/// Section 1 is an unmarked run of groups directly after the header;
/// sections 3 and 5 are introduced by their literal markers.
pub(crate) static SECTIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<section_0>AAXX\s+\d{5}\s+\d{5})\s+
        (?P<section_1>([\d/]{5}\s+){0,10})?
        (333\s+(?P<section_3>([\d/]{5}\s+){0,8}))?
        (555\s+(?P<section_5>([\d/]{5}\s+){0,6}))?
        ",
    )
    .expect("section grammar is valid")
});

/// Header grammar: report type marker, day of month, hour, wind unit
/// indicator, station id
pub(crate) static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<report_type>AAXX)\s+
        (?P<day_of_month>\d{2})(?P<hour>\d{2})(?P<wind_unit>\d)\s+
        (?P<station_id>\d{5})
        ",
    )
    .expect("header grammar is valid")
});

/// Section 1 grammar: the station and wind groups open the section as a
/// positional pair, everything after is optional and keyed by its leading
/// indicator digit. The 00fff group extends wind speed beyond 99 units.
pub(crate) static SECTION_1_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(
            (?P<iihVV>[\d/]{5})\s+
            (?P<Nddff>[\d/]{5})\s+
            (00(?P<fff>\d{3})\s+)?
            (1(?P<t_air>[\d/]{4})\s+)?
            (2(?P<dewp>[\d/]{4})\s+)?
            (3(?P<p_baro>\d{4}|\d{3}/)\s+)?
            (4(?P<p_slv>\d{4}|\d{3}/)\s+)?
            (5(?P<appp>\d{4})\s+)?
            (6(?P<RRRt>[\d/]{3}\d)\s+)?
            (7(?P<wwWW>\d{2}[\d/]{2})\s+)?
            (8(?P<NCCC>[\d/]{4})\s+)?
            (9(?P<GGgg>\d{4})\s+)?
        )?",
    )
    .expect("section 1 grammar is valid")
});

/// Section 3 grammar. The cloud layer run keeps its leading 8s so the
/// sub-splitter can separate up to four layers.
pub(crate) static SECTION_3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (1(?P<t_max>\d{4})\s+)?
        (2(?P<t_min>\d{4})\s+)?
        (3(?P<EsTT>\d{4})\s+)?
        (4(?P<Esss>[\d/]\d{3})\s+)?
        (55(?P<SSS>[\d/]{3})\s+)?
        (6(?P<RRRt>(\d{3}|///)\d)\s+)?
        (?P<NChh>(8\d[\d/]\d{2}\s+){1,4})?
        (9(?P<SSss_1>\d{4})\s+)?
        (9(?P<SSss_2>\d{4})\s+)?
        (9(?P<SSss_3>\d{4})\s+)?
        ",
    )
    .expect("section 3 grammar is valid")
});

/// Section 5 grammar (national groups)
pub(crate) static SECTION_5_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (1(?P<EsTT_1>\d{4})\s+)?
        (2(?P<t_min>\d{4})\s+)?
        (3(?P<EsTT_3>\d{4})\s+)?
        (6(?P<RRRt>[\d/]{3}\d)\s+)?
        (7(?P<RRR_24>\d{3})/\s+)?
        ",
    )
    .expect("section 5 grammar is valid")
});

/// Raw substrings of a report's sections, empty when absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSplit {
    pub section_0: String,
    pub section_1: String,
    pub section_3: String,
    pub section_5: String,
}

impl SectionSplit {
    /// Raw substring of one section
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Zero => &self.section_0,
            Section::One => &self.section_1,
            Section::Three => &self.section_3,
            Section::Five => &self.section_5,
        }
    }
}

/// Split a raw report into its sections.
///
/// The input is a single report line with the terminating `=` already
/// stripped. A missing or malformed header is the one fatal condition;
/// absent sections 1/3/5 come back as empty strings.
pub fn split_sections(raw: &str) -> Result<SectionSplit> {
    // The grammar delimits every group with trailing whitespace, so the
    // last token needs a separator too.
    let padded = format!("{} ", raw.trim());

    let caps = SECTIONS_RE.captures(&padded).ok_or_else(|| {
        Error::malformed_header(raw.trim(), "report does not begin with an AAXX land station header")
    })?;

    let capture = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    Ok(SectionSplit {
        section_0: capture("section_0"),
        section_1: capture("section_1"),
        section_3: capture("section_3"),
        section_5: capture("section_5"),
    })
}
