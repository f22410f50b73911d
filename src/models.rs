//! Core data structures for decoded SYNOP reports.
//!
//! Defines the decoded value representation, the wind unit enumeration,
//! section identifiers, and the nested decoded tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single decoded SYNOP variable.
///
/// Decoding never fails below the header, so the missing marker is part of
/// the value domain rather than an error: an absent or malformed group
/// decodes every variable it would have produced to [`DecodedValue::Missing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedValue {
    /// A numeric physical quantity (degrees Celsius, hPa, meters, ...)
    Number(f64),
    /// The wind unit declared by the report header
    WindUnit(WindUnit),
    /// Canonical text preserved verbatim (station id, date/time fields)
    Text(String),
    /// Value not transmitted or not decodable
    Missing,
}

impl DecodedValue {
    /// True if this is the missing marker
    pub fn is_missing(&self) -> bool {
        matches!(self, DecodedValue::Missing)
    }

    /// Numeric view of the value, if it is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DecodedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the value, if it is pass-through text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for DecodedValue {
    fn from(value: f64) -> Self {
        DecodedValue::Number(value)
    }
}

/// Wind speed unit declared by the header's iw indicator (WMO table 1855)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindUnit {
    MetersPerSecondEstimated,
    MetersPerSecondMeasured,
    KnotsEstimated,
    KnotsMeasured,
}

impl WindUnit {
    /// Map an iw indicator digit to a wind unit. Codes 2 and 5-9 are not
    /// assigned in table 1855.
    pub fn from_indicator(code: u8) -> Option<Self> {
        match code {
            0 => Some(WindUnit::MetersPerSecondEstimated),
            1 => Some(WindUnit::MetersPerSecondMeasured),
            3 => Some(WindUnit::KnotsEstimated),
            4 => Some(WindUnit::KnotsMeasured),
            _ => None,
        }
    }

    /// True if speeds in this report are transmitted in knots
    pub fn is_knots(&self) -> bool {
        matches!(self, WindUnit::KnotsEstimated | WindUnit::KnotsMeasured)
    }

    /// The meters-per-second unit with the same measurement method
    pub fn to_mps(self) -> Self {
        match self {
            WindUnit::KnotsEstimated => WindUnit::MetersPerSecondEstimated,
            WindUnit::KnotsMeasured => WindUnit::MetersPerSecondMeasured,
            other => other,
        }
    }
}

/// SYNOP report sections recognized by this decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Report header: type marker, day, hour, wind unit, station id
    Zero,
    /// International synoptic data
    One,
    /// Regional / climatological data
    Three,
    /// National data
    Five,
}

impl Section {
    /// All sections in decode order. Section 0 comes first by convention:
    /// nothing in sections 1/3/5 needs header context during decoding, but
    /// consumers such as wind unit conversion depend on it being present.
    pub const ALL: [Section; 4] = [Section::Zero, Section::One, Section::Three, Section::Five];

    /// Canonical section name used as the key of the decoded tree
    pub fn name(&self) -> &'static str {
        match self {
            Section::Zero => "section_0",
            Section::One => "section_1",
            Section::Three => "section_3",
            Section::Five => "section_5",
        }
    }
}

/// Decoded variables of one section, keyed by variable name.
///
/// Names are unique within a section; a later rule writing the same name
/// overwrites an earlier one (used deliberately for aliasing, e.g. the
/// high-wind `00fff` group overwriting `wind_speed`).
pub type SectionValues = BTreeMap<String, DecodedValue>;

/// The full decoded tree of a report: section name to variable mapping.
///
/// Built exactly once during report construction. Sections 1/3/5 are empty
/// mappings when absent from the raw report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedReport {
    pub section_0: SectionValues,
    pub section_1: SectionValues,
    pub section_3: SectionValues,
    pub section_5: SectionValues,
}

impl DecodedReport {
    /// Variables of one section
    pub fn section(&self, section: Section) -> &SectionValues {
        match section {
            Section::Zero => &self.section_0,
            Section::One => &self.section_1,
            Section::Three => &self.section_3,
            Section::Five => &self.section_5,
        }
    }

    pub(crate) fn section_mut(&mut self, section: Section) -> &mut SectionValues {
        match section {
            Section::Zero => &mut self.section_0,
            Section::One => &mut self.section_1,
            Section::Three => &mut self.section_3,
            Section::Five => &mut self.section_5,
        }
    }

    /// Sections with their variables, in decode order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &SectionValues)> {
        Section::ALL.iter().map(|s| (*s, self.section(*s)))
    }

    /// Look up a variable across sections; the last section (in decode
    /// order) producing the name wins
    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        let mut found = None;
        for (_, values) in self.sections() {
            if let Some(value) = values.get(name) {
                found = Some(value);
            }
        }
        found
    }
}
