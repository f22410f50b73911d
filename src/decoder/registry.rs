//! Per-section handler registry and group dispatch
//!
//! Each section owns a closed, compile-time table mapping the group names
//! its grammar can capture to a decoding rule. The tables are the single
//! place that wires grammar captures, sub-splitters and value coders
//! together; dispatch walks them in grammar order.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::decoder::groups::{self, SubFields};
use crate::decoder::{coders, guard, sections};
use crate::models::{DecodedValue, Section, SectionValues};

/// Coder for a group carrying a single variable
pub type ScalarCoder = fn(&str) -> DecodedValue;

/// Coder for a group that decodes into one or more named variables from
/// its sub-fields
pub type CompositeCoder = fn(&SubFields) -> Vec<(&'static str, DecodedValue)>;

/// Decoding rule for one grammar-recognized group name
pub enum GroupRule {
    /// The raw token is fed straight to a value coder and stored under
    /// `var`
    Scalar {
        var: &'static str,
        coder: ScalarCoder,
    },
    /// The raw token is decomposed by a sub-splitter first; the coder
    /// merges one or more named variables into the section
    Composite {
        splitter: &'static LazyLock<Regex>,
        coder: CompositeCoder,
    },
    /// Recognized by the grammar but deliberately not decoded yet
    Skip,
}

static SECTION_0_RULES: &[(&str, GroupRule)] = &[
    (
        "report_type",
        GroupRule::Scalar {
            var: "report_type",
            coder: coders::passthrough,
        },
    ),
    (
        "day_of_month",
        GroupRule::Scalar {
            var: "day_of_month",
            coder: coders::passthrough,
        },
    ),
    (
        "hour",
        GroupRule::Scalar {
            var: "hour",
            coder: coders::passthrough,
        },
    ),
    (
        "wind_unit",
        GroupRule::Scalar {
            var: "wind_unit",
            coder: coders::wind_unit,
        },
    ),
    (
        "station_id",
        GroupRule::Scalar {
            var: "station_id",
            coder: coders::passthrough,
        },
    ),
];

static SECTION_1_RULES: &[(&str, GroupRule)] = &[
    (
        "iihVV",
        GroupRule::Composite {
            splitter: &groups::IIHVV_RE,
            coder: coders::station_group,
        },
    ),
    (
        "Nddff",
        GroupRule::Composite {
            splitter: &groups::NDDFF_RE,
            coder: coders::wind_group,
        },
    ),
    // High-wind group: overwrites the Nddff speed when present (ff caps
    // at 99 units)
    (
        "fff",
        GroupRule::Scalar {
            var: "wind_speed",
            coder: coders::whole_number,
        },
    ),
    (
        "t_air",
        GroupRule::Scalar {
            var: "t_air",
            coder: coders::sign_magnitude_tenths,
        },
    ),
    (
        "dewp",
        GroupRule::Scalar {
            var: "dewp",
            coder: coders::sign_magnitude_tenths,
        },
    ),
    (
        "p_baro",
        GroupRule::Scalar {
            var: "p_baro",
            coder: coders::pressure_hpa,
        },
    ),
    (
        "p_slv",
        GroupRule::Scalar {
            var: "p_slv",
            coder: coders::pressure_hpa,
        },
    ),
    (
        "appp",
        GroupRule::Composite {
            splitter: &groups::APPP_RE,
            coder: coders::pressure_tendency_group,
        },
    ),
    (
        "RRRt",
        GroupRule::Composite {
            splitter: &groups::RRRT_RE,
            coder: coders::precipitation_group,
        },
    ),
    (
        "wwWW",
        GroupRule::Composite {
            splitter: &groups::WWWW_RE,
            coder: coders::weather_group,
        },
    ),
    (
        "NCCC",
        GroupRule::Composite {
            splitter: &groups::NCCC_RE,
            coder: coders::cloud_group,
        },
    ),
    ("GGgg", GroupRule::Skip),
];

static SECTION_3_RULES: &[(&str, GroupRule)] = &[
    (
        "t_max",
        GroupRule::Scalar {
            var: "t_max",
            coder: coders::sign_magnitude_tenths,
        },
    ),
    (
        "t_min",
        GroupRule::Scalar {
            var: "t_min",
            coder: coders::sign_magnitude_tenths,
        },
    ),
    ("EsTT", GroupRule::Skip),
    (
        "Esss",
        GroupRule::Composite {
            splitter: &groups::ESSS_RE,
            coder: coders::ground_snow_group,
        },
    ),
    (
        "SSS",
        GroupRule::Scalar {
            var: "sunshine",
            coder: coders::sunshine_hours,
        },
    ),
    (
        "RRRt",
        GroupRule::Composite {
            splitter: &groups::RRRT_RE,
            coder: coders::precipitation_group,
        },
    ),
    (
        "NChh",
        GroupRule::Composite {
            splitter: &groups::NCHH_RUN_RE,
            coder: coders::cloud_layers_group,
        },
    ),
    (
        "SSss_1",
        GroupRule::Scalar {
            var: "special_phenomena_1",
            coder: coders::passthrough,
        },
    ),
    (
        "SSss_2",
        GroupRule::Scalar {
            var: "special_phenomena_2",
            coder: coders::passthrough,
        },
    ),
    (
        "SSss_3",
        GroupRule::Scalar {
            var: "special_phenomena_3",
            coder: coders::passthrough,
        },
    ),
];

static SECTION_5_RULES: &[(&str, GroupRule)] = &[
    (
        "EsTT_1",
        GroupRule::Composite {
            splitter: &groups::ESTT_RE,
            coder: coders::ground_temperature_group,
        },
    ),
    (
        "t_min",
        GroupRule::Scalar {
            var: "t_min",
            coder: coders::sign_magnitude_tenths,
        },
    ),
    (
        "EsTT_3",
        GroupRule::Composite {
            splitter: &groups::ESTT_RE,
            coder: coders::ground_temperature_min_group,
        },
    ),
    (
        "RRRt",
        GroupRule::Composite {
            splitter: &groups::RRRT_RE,
            coder: coders::precipitation_group,
        },
    ),
    (
        "RRR_24",
        GroupRule::Scalar {
            var: "precip_24h",
            coder: coders::precip_amount_mm,
        },
    ),
];

/// Rule table for a section, in grammar order
pub fn rules_for(section: Section) -> &'static [(&'static str, GroupRule)] {
    match section {
        Section::Zero => SECTION_0_RULES,
        Section::One => SECTION_1_RULES,
        Section::Three => SECTION_3_RULES,
        Section::Five => SECTION_5_RULES,
    }
}

fn grammar_for(section: Section) -> &'static Regex {
    match section {
        Section::Zero => &sections::HEADER_RE,
        Section::One => &sections::SECTION_1_RE,
        Section::Three => &sections::SECTION_3_RE,
        Section::Five => &sections::SECTION_5_RE,
    }
}

/// Decode one section's raw substring into its variable mapping.
///
/// Every rule in the table contributes its variables, decoded or missing;
/// a group that is absent or malformed resolves to the missing marker for
/// exactly the variables it would have produced and never disturbs its
/// siblings.
pub fn decode_section(section: Section, raw: &str) -> SectionValues {
    // Group captures are whitespace-delimited, including the last one.
    let padded = format!("{} ", raw.trim());
    let caps = grammar_for(section).captures(&padded);

    let mut values = SectionValues::new();
    for (group, rule) in rules_for(section) {
        let token = caps
            .as_ref()
            .and_then(|c| c.name(group))
            .map(|m| m.as_str())
            .unwrap_or("");

        if token.is_empty() {
            debug!(section = section.name(), group = *group, "group not present");
        } else {
            debug!(
                section = section.name(),
                group = *group,
                token,
                "group matched"
            );
        }

        // An absent group still registers its variables as missing, but
        // must not clobber a value an earlier rule sharing the name wrote
        // (e.g. 00fff aliasing the Nddff wind speed).
        let present = !token.is_empty();
        match rule {
            GroupRule::Skip => {}
            GroupRule::Scalar { var, coder } => {
                let value = guard::guarded(*coder)(token);
                if present {
                    values.insert((*var).to_string(), value);
                } else {
                    values.entry((*var).to_string()).or_insert(value);
                }
            }
            GroupRule::Composite { splitter, coder } => {
                let fields = SubFields::split(splitter, token.trim());
                for (var, value) in coder(&fields) {
                    if present {
                        values.insert(var.to_string(), value);
                    } else {
                        values.entry(var.to_string()).or_insert(value);
                    }
                }
            }
        }
    }
    values
}
