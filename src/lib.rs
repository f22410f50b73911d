//! SYNOP Decoder Library
//!
//! A Rust library for decoding WMO FM-12 SYNOP surface weather reports
//! (fixed-token positional text codes transmitted by land stations) into
//! structured physical variables.
//!
//! This library provides tools for:
//! - Splitting a raw report into its sections (header, 1, 3, 5)
//! - Matching each section against an ordered grammar of optional
//!   5-character code groups
//! - Dispatching recognized groups through a closed per-section rule table
//! - Decoding each group with field-specific value coders wrapped in a
//!   uniform missing-value guard
//! - Flattening the decoded tree into a tabular, ordered variable mapping
//!
//! Decoding a report is a bounded, synchronous computation with no I/O.
//! The compiled grammars and rule tables are process-wide statics, built
//! once and safe for concurrent read access.
//!
//! ## Usage
//!
//! ```rust
//! use synop_decoder::SynopReport;
//!
//! # fn example() -> synop_decoder::Result<()> {
//! let raw = "AAXX 01031 28877 /1598 70603 10026 21007 39840 40241";
//! let report = SynopReport::decode(raw)?;
//!
//! let vars = report.flatten(&["t_air", "dewp", "p_slv"]);
//! for (name, value) in vars {
//!     println!("{name}: {value:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod models;
pub mod report;

// Grammar and decoding layers
pub mod decoder {
    pub mod coders;
    pub mod groups;
    pub mod guard;
    pub mod registry;
    pub mod sections;

    #[cfg(test)]
    pub mod tests;
}

// Re-export commonly used types
pub use models::{DecodedReport, DecodedValue, Section, SectionValues, WindUnit};
pub use report::SynopReport;

/// Result type alias for the SYNOP decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SYNOP decoding operations
///
/// Only the header of a report is load-bearing: if it cannot be located,
/// no section boundary can be either. Every irregularity below the header
/// is absorbed into the decoded tree as a missing value and is deliberately
/// not represented here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Report header does not match the FM-12 land-station grammar
    #[error("malformed SYNOP header in report '{report}': {message}")]
    MalformedHeader { report: String, message: String },
}

impl Error {
    /// Create a malformed header error with context
    pub fn malformed_header(report: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            report: report.into(),
            message: message.into(),
        }
    }
}
