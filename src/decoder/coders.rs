//! Value coders for SYNOP code groups
//!
//! Pure functions from raw tokens (or sub-field mappings) to decoded
//! physical values, one per WMO code-table rule. Coders assume their
//! input has already passed the missing-value guard; anything else that
//! fails to decode resolves to the missing marker, never an error.

use crate::constants::code_tables::*;
use crate::constants::{NULL_SENTINEL, PRESSURE_IMPLIED_THOUSANDS_THRESHOLD};
use crate::models::DecodedValue::{self, Missing, Number, Text};
use crate::models::WindUnit;

use super::groups::{self, SubFields};

/// Strict unsigned integer parse: digits only, no sign, no whitespace
fn int(raw: &str) -> Option<u32> {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

/// Validate a code against a table domain and pass it through as a number
fn code_number(raw: &str, min: u32, max: u32) -> DecodedValue {
    match int(raw) {
        Some(code) if (min..=max).contains(&code) => Number(code as f64),
        _ => Missing,
    }
}

/// Sign digit (0 = non-negative, 1 = negative) followed by a magnitude.
/// Any other sign digit is outside the code form and decodes to missing.
fn signed_magnitude(raw: &str) -> Option<f64> {
    let (sign, magnitude) = raw.split_at_checked(1)?;
    let sign = match sign {
        "0" => 1.0,
        "1" => -1.0,
        _ => return None,
    };
    Some(sign * int(magnitude)? as f64)
}

// =============================================================================
// Scalar coders
// =============================================================================

/// Canonical text, not reinterpreted. Keeps leading zeros in station ids
/// and date/time fields intact.
pub fn passthrough(raw: &str) -> DecodedValue {
    Text(raw.to_string())
}

/// Wind unit indicator iw (table 1855)
pub fn wind_unit(raw: &str) -> DecodedValue {
    int(raw)
        .and_then(|c| u8::try_from(c).ok())
        .and_then(WindUnit::from_indicator)
        .map(DecodedValue::WindUnit)
        .unwrap_or(Missing)
}

/// Sign digit plus three digits of magnitude in tenths of a degree
/// (air, dew point, minimum and maximum temperature)
pub fn sign_magnitude_tenths(raw: &str) -> DecodedValue {
    if raw.len() != 4 {
        return Missing;
    }
    signed_magnitude(raw).map(|v| Number(v / 10.0)).unwrap_or(Missing)
}

/// Sign digit plus two digits in whole degrees (section 5 ground
/// temperature groups)
pub fn sign_magnitude_whole(raw: &str) -> DecodedValue {
    if raw.len() != 3 {
        return Missing;
    }
    signed_magnitude(raw).map(Number).unwrap_or(Missing)
}

/// Implied-decimal pressure in hPa (station level 3PPPP, sea level 4PPPP).
///
/// Four digits are tenths of hectopascals; a trailing `/` means tenths
/// were not transmitted and the remaining digits are whole hectopascals.
/// The dropped leading digit is restored deterministically: values below
/// the threshold gain 1000 hPa, placing every code in a band containing
/// the plausible 800-1100 hPa range (`9840` -> 984.0, `0241` -> 1024.1).
pub fn pressure_hpa(raw: &str) -> DecodedValue {
    let value = if let Some(whole) = raw.strip_suffix(NULL_SENTINEL) {
        int(whole).map(|d| d as f64)
    } else {
        int(raw).map(|d| d as f64 / 10.0)
    };
    match value {
        Some(v) if v < PRESSURE_IMPLIED_THOUSANDS_THRESHOLD => Number(v + 1000.0),
        Some(v) => Number(v),
        None => Missing,
    }
}

/// Horizontal visibility VV (table 4377), in kilometers.
///
/// Codes 90-99 are the coarse scale for stations without instruments;
/// 89 means "more than 70 km" and decodes to the band's lower bound.
pub fn visibility_km(raw: &str) -> DecodedValue {
    let Some(code) = int(raw) else { return Missing };
    let km = match code {
        0 => 0.0, // under 100 m
        1..=50 => code as f64 / 10.0,
        56..=80 => (code - 50) as f64,
        81..=88 => 30.0 + 5.0 * (code - 80) as f64,
        89 => 70.0,
        90 => 0.0, // under 50 m
        91 => 0.05,
        92 => 0.2,
        93 => 0.5,
        94 => 1.0,
        95 => 2.0,
        96 => 4.0,
        97 => 10.0,
        98 => 20.0,
        99 => 50.0,
        _ => return Missing, // 51-55 not assigned
    };
    Number(km)
}

/// Cloud base height band h (table 1600), lower bound in meters
pub fn cloud_base_m(raw: &str) -> DecodedValue {
    int(raw)
        .and_then(|code| CLOUD_BASE_BANDS_M.get(code as usize))
        .map(|meters| Number(*meters))
        .unwrap_or(Missing)
}

/// Cloud cover in octas, 9 = sky obscured (table 2700)
pub fn cloud_cover_octas(raw: &str) -> DecodedValue {
    code_number(raw, 0, CLOUD_COVER_MAX)
}

/// Wind direction dd in tens of degrees. 00 (calm) and 99 (variable)
/// carry no bearing and decode to missing; the speed still decodes.
pub fn wind_direction_deg(raw: &str) -> DecodedValue {
    match int(raw) {
        Some(dd @ 1..=36) => Number((dd * 10) as f64),
        _ => Missing,
    }
}

/// Plain numeric pass-through (wind speed ff/fff, in the unit the header
/// declared)
pub fn whole_number(raw: &str) -> DecodedValue {
    int(raw).map(|n| Number(n as f64)).unwrap_or(Missing)
}

/// Precipitation amount RRR (table 3590), in millimeters
fn precip_mm(code: u32) -> Option<f64> {
    match code {
        0..=988 => Some(code as f64),
        989 => Some(989.0), // 989 mm or more
        990 => Some(0.0),   // trace
        991..=999 => Some((code - 990) as f64 / 10.0),
        _ => None,
    }
}

/// Precipitation amount token (section 5 RRR_24 and the RRRt sub-field)
pub fn precip_amount_mm(raw: &str) -> DecodedValue {
    int(raw).and_then(precip_mm).map(Number).unwrap_or(Missing)
}

/// Precipitation reference period tR (table 4019), in hours
pub fn precip_duration_hours(raw: &str) -> DecodedValue {
    match int(raw) {
        Some(t @ 1..=9) => Number(PRECIP_DURATION_HOURS[(t - 1) as usize]),
        _ => Missing,
    }
}

/// Snow depth sss (table 3889), in centimeters. 997 is "less than
/// 0.5 cm"; 998 (patchy) and 999 (measurement impossible) carry no depth.
pub fn snow_depth_cm(raw: &str) -> DecodedValue {
    match int(raw) {
        Some(depth @ 1..=996) => Number(depth as f64),
        Some(997) => Number(0.0),
        _ => Missing,
    }
}

/// Sunshine duration SSS in tenths of hours, decoded to hours
pub fn sunshine_hours(raw: &str) -> DecodedValue {
    int(raw).map(|t| Number(t as f64 / 10.0)).unwrap_or(Missing)
}

/// Cloud layer height hh (table 1677), in meters. Codes 90-99 are the
/// coarse band scale and decode to the band's lower bound.
pub fn cloud_height_m(raw: &str) -> DecodedValue {
    let Some(code) = int(raw) else { return Missing };
    let meters = match code {
        0..=50 => code as f64 * 30.0,
        56..=80 => (code - 50) as f64 * 300.0,
        81..=88 => 9000.0 + (code - 80) as f64 * 1500.0,
        89 => 21000.0, // more than 21 km
        90..=99 => CLOUD_BASE_BANDS_M[(code - 90) as usize],
        _ => return Missing, // 51-55 not assigned
    };
    Number(meters)
}

/// Cloud genus code (tables 0513/0515/0509)
pub fn cloud_genus(raw: &str) -> DecodedValue {
    code_number(raw, 0, CLOUD_GENUS_MAX)
}

/// State of ground code (tables 0901/0975)
pub fn state_of_ground(raw: &str) -> DecodedValue {
    code_number(raw, 0, 9)
}

// =============================================================================
// Composite coders
// =============================================================================

/// iihVV: precipitation group indicator, weather group indicator, cloud
/// base band and visibility
pub fn station_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        (
            "precip_indicator",
            fields.decode("ir", |raw| code_number(raw, 0, PRECIP_INDICATOR_MAX)),
        ),
        (
            "weather_indicator",
            fields.decode("ix", |raw| {
                code_number(raw, WEATHER_INDICATOR_MIN, WEATHER_INDICATOR_MAX)
            }),
        ),
        ("cloud_base", fields.decode("h", cloud_base_m)),
        ("visibility", fields.decode("VV", visibility_km)),
    ]
}

/// Nddff: total cloud cover, wind direction and wind speed
pub fn wind_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        ("cloud_cover", fields.decode("N", cloud_cover_octas)),
        ("wind_dir", fields.decode("dd", wind_direction_deg)),
        ("wind_speed", fields.decode("ff", whole_number)),
    ]
}

/// 5appp: pressure tendency over the past three hours. The amount is
/// transmitted unsigned; characteristics 5-8 denote falling pressure.
pub fn pressure_tendency_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    let characteristic = fields.decode("a", |raw| code_number(raw, 0, PRESSURE_TENDENCY_MAX));
    let amount = fields.decode("ppp", |raw| {
        int(raw).map(|t| Number(t as f64 / 10.0)).unwrap_or(Missing)
    });

    let tendency = match (&characteristic, &amount) {
        (Number(a), Number(p)) if *a >= PRESSURE_FALLING_MIN as f64 => Number(-p),
        (Number(_), Number(p)) => Number(*p),
        _ => Missing,
    };

    vec![
        ("p_tendency_characteristic", characteristic),
        ("p_tendency", tendency),
    ]
}

/// 6RRRt: precipitation amount and reference period
pub fn precipitation_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        ("precip", fields.decode("RRR", precip_amount_mm)),
        ("precip_duration", fields.decode("t", precip_duration_hours)),
    ]
}

/// 7wwWW: present weather and past weather codes
pub fn weather_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        (
            "present_weather",
            fields.decode("ww", |raw| code_number(raw, 0, PRESENT_WEATHER_MAX)),
        ),
        (
            "past_weather_1",
            fields.decode("W1", |raw| code_number(raw, 0, PAST_WEATHER_MAX)),
        ),
        (
            "past_weather_2",
            fields.decode("W2", |raw| code_number(raw, 0, PAST_WEATHER_MAX)),
        ),
    ]
}

/// 8NCCC: low cloud amount and cloud genus at the three levels
pub fn cloud_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        ("cloud_amount_low", fields.decode("N", cloud_cover_octas)),
        ("cloud_type_low", fields.decode("CL", cloud_genus)),
        ("cloud_type_middle", fields.decode("CM", cloud_genus)),
        ("cloud_type_high", fields.decode("CH", cloud_genus)),
    ]
}

/// 4Esss: state of ground under snow and snow depth
pub fn ground_snow_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        ("ground_state_snow", fields.decode("E", state_of_ground)),
        ("snow_depth", fields.decode("sss", snow_depth_cm)),
    ]
}

/// Variable names for the four section-3 cloud layers
const LAYER_FIELDS: [&str; 4] = ["c1", "c2", "c3", "c4"];
const LAYER_VARS: [(&str, &str, &str); 4] = [
    ("cloud_cover_1", "cloud_genus_1", "cloud_height_1"),
    ("cloud_cover_2", "cloud_genus_2", "cloud_height_2"),
    ("cloud_cover_3", "cloud_genus_3", "cloud_height_3"),
    ("cloud_cover_4", "cloud_genus_4", "cloud_height_4"),
];

/// Section 3 run of 8NChh groups: amount, genus and height per layer
pub fn cloud_layers_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    let mut values = Vec::with_capacity(12);
    for (field, (cover, genus, height)) in LAYER_FIELDS.iter().zip(LAYER_VARS.iter()) {
        let layer = SubFields::split(&groups::NCHH_LAYER_RE, fields.get(field));
        values.push((*cover, layer.decode("N", cloud_cover_octas)));
        values.push((*genus, layer.decode("C", cloud_genus)));
        values.push((*height, layer.decode("hh", cloud_height_m)));
    }
    values
}

/// Section 5 group 1EsTT: state of ground and ground temperature
pub fn ground_temperature_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        ("ground_state", fields.decode("E", state_of_ground)),
        ("t_ground", fields.decode("sTT", sign_magnitude_whole)),
    ]
}

/// Section 5 group 3EsTT: state of ground and minimum ground temperature
pub fn ground_temperature_min_group(fields: &SubFields) -> Vec<(&'static str, DecodedValue)> {
    vec![
        ("ground_state", fields.decode("E", state_of_ground)),
        ("t_ground_min", fields.decode("sTT", sign_magnitude_whole)),
    ]
}
