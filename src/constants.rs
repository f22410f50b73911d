//! Constants for SYNOP decoding
//!
//! This module contains the fixed vocabulary of the FM-12 code form:
//! sentinel characters, section markers, group geometry, and the numeric
//! constants the value coders depend on.

// =============================================================================
// Code form geometry
// =============================================================================

/// Character occupying a digit position when the value was not transmitted
pub const NULL_SENTINEL: char = '/';

/// Fixed width of a SYNOP code group
pub const GROUP_LEN: usize = 5;

/// Land-station report type marker (FM-12 AAXX)
pub const REPORT_TYPE_LAND: &str = "AAXX";

/// Section 3 (regional/climatological data) marker
pub const SECTION_3_MARKER: &str = "333";

/// Section 5 (national data) marker
pub const SECTION_5_MARKER: &str = "555";

/// Maximum group counts per section, as bounded by the section grammar
pub const SECTION_1_MAX_GROUPS: usize = 10;
pub const SECTION_3_MAX_GROUPS: usize = 8;
pub const SECTION_5_MAX_GROUPS: usize = 6;

// =============================================================================
// Unit conversion
// =============================================================================

/// Knots to meters per second
pub const KNOTS_TO_MPS: f64 = 0.514_444_444_444_44;

// =============================================================================
// Pressure disambiguation
// =============================================================================

/// Threshold for the implied leading digit of PPPP pressure codes.
///
/// Pressure groups transmit tenths of hectopascals with the leading digit
/// dropped. After placing the decimal point, any value below this threshold
/// gains 1000 hPa, which maps every code deterministically into a band
/// containing the physically plausible 800-1100 hPa range.
pub const PRESSURE_IMPLIED_THOUSANDS_THRESHOLD: f64 = 500.0;

// =============================================================================
// WMO code table domains
// =============================================================================

/// Code table domains used by the categorical value coders. Codes outside
/// the listed domain decode to the missing marker.
pub mod code_tables {
    /// Precipitation group indicator iR (table 1819)
    pub const PRECIP_INDICATOR_MAX: u32 = 4;

    /// Station operation / weather group indicator ix (table 1860)
    pub const WEATHER_INDICATOR_MIN: u32 = 1;
    pub const WEATHER_INDICATOR_MAX: u32 = 7;

    /// Cloud cover in octas (table 2700): 0-8 octas, 9 = sky obscured
    pub const CLOUD_COVER_MAX: u32 = 9;

    /// Pressure tendency characteristic a (table 0200)
    pub const PRESSURE_TENDENCY_MAX: u32 = 8;

    /// Characteristics denoting falling pressure in table 0200
    pub const PRESSURE_FALLING_MIN: u32 = 5;

    /// Present weather ww (table 4677)
    pub const PRESENT_WEATHER_MAX: u32 = 99;

    /// Past weather W1/W2 (table 4561)
    pub const PAST_WEATHER_MAX: u32 = 9;

    /// Cloud genus C (tables 0513/0515/0509)
    pub const CLOUD_GENUS_MAX: u32 = 9;

    /// Cloud base height bands hh (table 1600), lower bound in meters
    pub const CLOUD_BASE_BANDS_M: &[f64] = &[
        0.0, 50.0, 100.0, 200.0, 300.0, 600.0, 1000.0, 1500.0, 2000.0, 2500.0,
    ];

    /// Duration of precipitation period tR (table 4019), in hours
    pub const PRECIP_DURATION_HOURS: &[f64] = &[6.0, 12.0, 18.0, 24.0, 1.0, 2.0, 3.0, 9.0, 15.0];
}
