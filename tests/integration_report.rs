//! End-to-end tests decoding real SYNOP report strings

use synop_decoder::{DecodedReport, DecodedValue, Error, SynopReport, WindUnit};

const FULL_REPORT: &str =
    "AAXX 01031 28877 /1598 70603 10026 21007 39840 40241 52009 70282 87500 555 20026 31002 69902 7990/";

fn number(report: &SynopReport, name: &str) -> f64 {
    report
        .decoded()
        .get(name)
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| panic!("{name} did not decode to a number"))
}

#[test]
fn decodes_example_report_header() {
    let report = SynopReport::decode(FULL_REPORT).unwrap();
    let header = &report.decoded().section_0;

    assert_eq!(header["report_type"], DecodedValue::Text("AAXX".to_string()));
    assert_eq!(header["day_of_month"], DecodedValue::Text("01".to_string()));
    assert_eq!(header["hour"], DecodedValue::Text("03".to_string()));
    assert_eq!(
        header["wind_unit"],
        DecodedValue::WindUnit(WindUnit::MetersPerSecondMeasured)
    );
    assert_eq!(report.station_id(), Some("28877"));
}

#[test]
fn decodes_example_report_section_1() {
    let report = SynopReport::decode(FULL_REPORT).unwrap();

    assert_eq!(number(&report, "t_air"), 2.6);
    assert_eq!(number(&report, "dewp"), -0.7);
    assert_eq!(number(&report, "p_baro"), 984.0);
    assert_eq!(number(&report, "p_slv"), 1024.1);
    assert_eq!(number(&report, "p_tendency"), 0.9);
    assert_eq!(number(&report, "present_weather"), 2.0);
    assert_eq!(number(&report, "cloud_amount_low"), 7.0);
}

#[test]
fn decodes_example_report_section_5() {
    let report = SynopReport::decode(FULL_REPORT).unwrap();
    let section_5 = &report.decoded().section_5;

    assert_eq!(section_5["t_min"], DecodedValue::Number(2.6));
    assert_eq!(section_5["t_ground_min"], DecodedValue::Number(2.0));
    assert_eq!(section_5["precip"], DecodedValue::Number(0.0));
    assert_eq!(section_5["precip_duration"], DecodedValue::Number(12.0));
    assert_eq!(section_5["precip_24h"], DecodedValue::Number(0.0));
}

#[test]
fn minimum_temperature_group_decodes_in_section_3() {
    let report = SynopReport::decode("AAXX 01031 28877 333 20026").unwrap();
    assert_eq!(
        report.decoded().section_3["t_min"],
        DecodedValue::Number(2.6)
    );
}

#[test]
fn header_only_report_decodes_with_missing_sections() {
    let report = SynopReport::decode("AAXX 01031 28877").unwrap();

    // Section 0 decodes normally
    assert_eq!(report.station_id(), Some("28877"));

    // Every variable of the absent sections is the missing marker
    for section in [
        &report.decoded().section_1,
        &report.decoded().section_3,
        &report.decoded().section_5,
    ] {
        assert!(!section.is_empty());
        assert!(section.values().all(|v| v.is_missing()));
    }
}

#[test]
fn malformed_header_is_a_construction_failure() {
    let err = SynopReport::decode("BBXX 01031 28877 10026").unwrap_err();
    assert!(matches!(err, Error::MalformedHeader { .. }));
}

#[test]
fn decoding_is_idempotent() {
    let first = SynopReport::decode(FULL_REPORT).unwrap();
    let second = SynopReport::decode(FULL_REPORT).unwrap();
    assert_eq!(first.decoded(), second.decoded());
}

#[test]
fn converts_wind_speed_from_knots() {
    // iw=4: speeds measured in knots
    let mut report = SynopReport::decode("AAXX 01034 28877 11583 70603").unwrap();
    assert_eq!(number(&report, "wind_speed"), 3.0);

    report.convert_wind_unit();

    let speed = number(&report, "wind_speed");
    assert!((speed - 1.543_333).abs() < 1e-5);
    assert_eq!(
        report.decoded().section_0["wind_unit"],
        DecodedValue::WindUnit(WindUnit::MetersPerSecondMeasured)
    );
}

#[test]
fn wind_conversion_is_idempotent() {
    let mut report = SynopReport::decode("AAXX 01034 28877 11583 70603").unwrap();
    report.convert_wind_unit();
    let once = report.clone();

    report.convert_wind_unit();
    assert_eq!(report, once);
}

#[test]
fn wind_conversion_is_a_noop_for_meters_per_second() {
    let mut report = SynopReport::decode(FULL_REPORT).unwrap();
    let before = report.clone();

    report.convert_wind_unit();
    assert_eq!(report, before);
}

#[test]
fn flatten_returns_requested_names_in_request_order() {
    let report = SynopReport::decode(FULL_REPORT).unwrap();
    let flat = report.flatten(&["station_id", "t_air", "dewp", "p_slv"]);

    let names: Vec<&str> = flat.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["station_id", "t_air", "dewp", "p_slv"]);
    assert_eq!(flat[1].1, DecodedValue::Number(2.6));
}

#[test]
fn flatten_takes_the_last_section_on_collision() {
    // Precipitation groups in both section 1 and section 5
    let report =
        SynopReport::decode("AAXX 01031 28877 11583 70603 60012 555 69902").unwrap();

    assert_eq!(
        report.decoded().section_1["precip"],
        DecodedValue::Number(1.0)
    );
    assert_eq!(
        report.decoded().section_5["precip"],
        DecodedValue::Number(0.0)
    );

    let flat = report.flatten(&["precip"]);
    assert_eq!(flat[0].1, DecodedValue::Number(0.0));
}

#[test]
fn flatten_maps_unproduced_names_to_missing() {
    let report = SynopReport::decode(FULL_REPORT).unwrap();
    let flat = report.flatten(&["no_such_variable"]);

    assert_eq!(flat[0], ("no_such_variable".to_string(), DecodedValue::Missing));
}

#[test]
fn decoded_tree_serializes_for_downstream_pipelines() {
    let report = SynopReport::decode(FULL_REPORT).unwrap();
    let tree = serde_json::to_value(report.decoded()).unwrap();

    assert_eq!(tree["section_1"]["t_air"], serde_json::json!(2.6));
    assert_eq!(tree["section_0"]["station_id"], serde_json::json!("28877"));
    assert_eq!(tree["section_0"]["wind_unit"], serde_json::json!("meters_per_second_measured"));
    // The missing marker flattens to null
    assert_eq!(tree["section_3"]["t_max"], serde_json::Value::Null);
}

#[test]
fn decoded_tree_round_trips_through_json() {
    // The untagged value representation must come back intact: numbers,
    // text, the wind unit, and null as the missing marker
    let report = SynopReport::decode(FULL_REPORT).unwrap();
    let json = serde_json::to_string(report.decoded()).unwrap();
    let restored: DecodedReport = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, report.decoded());
    assert_eq!(
        restored.section_0["wind_unit"],
        DecodedValue::WindUnit(WindUnit::MetersPerSecondMeasured)
    );
    assert_eq!(restored.section_3["t_max"], DecodedValue::Missing);
}