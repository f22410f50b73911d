//! SYNOP report orchestration
//!
//! Owns the raw report text and the decoded tree, and exposes the
//! flattening and wind unit conversion operations consumers build on.

use serde::Serialize;
use tracing::info;

use crate::constants::KNOTS_TO_MPS;
use crate::decoder::{registry, sections};
use crate::models::{DecodedReport, DecodedValue, Section};
use crate::Result;

/// A decoded FM-12 SYNOP land station report.
///
/// The decoded tree is built once during [`SynopReport::decode`] and is
/// read-only afterwards, safe to share across threads. The one mutation,
/// [`convert_wind_unit`](SynopReport::convert_wind_unit), takes `&mut
/// self` and is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynopReport {
    raw: String,
    decoded: DecodedReport,
}

impl SynopReport {
    /// Decode a raw report line (terminating `=` already stripped).
    ///
    /// Fails only when the header cannot be located; every irregularity
    /// below the header decodes to missing values. Section 0 is decoded
    /// first by convention so consumers that depend on header variables
    /// (unit conversion) always find them.
    pub fn decode(raw: &str) -> Result<Self> {
        let split = sections::split_sections(raw)?;

        let mut decoded = DecodedReport::default();
        for section in Section::ALL {
            *decoded.section_mut(section) = registry::decode_section(section, split.section(section));
        }

        info!(
            station = decoded
                .section_0
                .get("station_id")
                .and_then(|v| v.as_str())
                .unwrap_or("?"),
            "decoded SYNOP report"
        );

        Ok(Self {
            raw: raw.to_string(),
            decoded,
        })
    }

    /// The raw report this was decoded from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The decoded section -> variable -> value tree
    pub fn decoded(&self) -> &DecodedReport {
        &self.decoded
    }

    /// Station identifier from the header, if it decoded
    pub fn station_id(&self) -> Option<&str> {
        self.decoded.section_0.get("station_id").and_then(|v| v.as_str())
    }

    /// Convert the wind speed to meters per second when the header
    /// declared knots, and rename the unit to match.
    ///
    /// Idempotent: the conversion is keyed off the wind unit value it
    /// rewrites, so once the unit reads meters per second further calls
    /// are no-ops. A no-op as well when the unit already is meters per
    /// second or never decoded.
    pub fn convert_wind_unit(&mut self) {
        let unit = match self.decoded.section_0.get("wind_unit") {
            Some(DecodedValue::WindUnit(unit)) if unit.is_knots() => *unit,
            _ => return,
        };

        if let Some(DecodedValue::Number(speed)) = self.decoded.section_1.get_mut("wind_speed") {
            *speed *= KNOTS_TO_MPS;
        }
        self.decoded
            .section_0
            .insert("wind_unit".to_string(), DecodedValue::WindUnit(unit.to_mps()));
    }

    /// Flatten the decoded tree into an ordered variable mapping.
    ///
    /// Returns the requested names in request order. On a name collision
    /// across sections the last section in decode order wins, matching
    /// the tree's own merge order; names never produced by any section
    /// map to the missing marker.
    pub fn flatten(&self, names: &[&str]) -> Vec<(String, DecodedValue)> {
        names
            .iter()
            .map(|name| {
                let value = self
                    .decoded
                    .get(name)
                    .cloned()
                    .unwrap_or(DecodedValue::Missing);
                (name.to_string(), value)
            })
            .collect()
    }
}
