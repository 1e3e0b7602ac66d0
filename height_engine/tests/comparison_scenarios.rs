//! End-to-end scenarios for the comparison chart numeric contract.
//!
//! These tests exercise the public API the way the chart and the image upload
//! form use it:
//! 1. Upload form converts a typed height into metres
//! 2. Chart aggregates heights, builds its scale and labels gridlines
//! 3. List rows format each entry with smart units

use approx::assert_relative_eq;
use height_engine::{
    convert_height, convert_height_for_grid_imperial, convert_height_smart,
    convert_height_smart_imperial, format_number, get_best_unit, get_imperial_grid_unit_label,
    to_meters, to_unit, FormatConfig, GridScale, HeightError, HeightFormatter, Precision, Unit,
    UnitSystem,
};

// ==================== Conversion ====================

#[test]
fn test_roundtrip_every_unit() {
    for unit in UnitSystem::all() {
        for v in [1e-6, 1.0, 1e6] {
            let meters = to_meters(v, *unit).unwrap();
            assert_relative_eq!(to_unit(meters, *unit).unwrap(), v, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_upload_form_tags() {
    let unit: UnitSystem = "ft".parse().unwrap();
    assert_relative_eq!(to_meters(6.0, unit).unwrap(), 1.8288, max_relative = 1e-12);

    let err = "cubit".parse::<UnitSystem>().unwrap_err();
    assert_eq!(err, HeightError::UnsupportedUnit("cubit".to_string()));
}

// ==================== Unit selection ====================

#[test]
fn test_metric_selection_never_shrinks() {
    let mut previous = get_best_unit(0.0, true).unwrap();
    for exp in -130..=290 {
        let meters = 10f64.powf(exp as f64 / 10.0);
        let unit = get_best_unit(meters, true).unwrap();
        assert!(unit.meters_per_unit() >= previous.meters_per_unit());
        previous = unit;
    }
    assert_eq!(previous, UnitSystem::Kilometer);
}

// ==================== Anchor scenarios ====================

#[test]
fn test_person_height() {
    assert_eq!(convert_height_smart(1.8, true).unwrap(), "1.8 m");
    assert_eq!(convert_height_smart_imperial(1.8).unwrap(), "5 ft 11 in");
    assert_eq!(convert_height(1.8, Unit::FtIn).unwrap(), "5 ft 11 in");
}

#[test]
fn test_eiffel_tower_stays_in_meters() {
    assert_eq!(convert_height_smart(324.0, true).unwrap(), "324 m");
}

// ==================== Chart consistency ====================

fn gridline_values(max: f64) -> Vec<f64> {
    (0..=20).map(|i| max * i as f64 / 20.0).collect()
}

#[test]
fn test_imperial_gridlines_share_one_unit() {
    for max in [0.2, 1.8, 324.0, 1700.0, 8848.0, 8.7e28] {
        let header = get_imperial_grid_unit_label(max).unwrap();
        for m in gridline_values(max) {
            let label = convert_height_for_grid_imperial(m, max).unwrap();
            match header {
                "mi" => assert!(label.ends_with(" mi"), "{} in {} chart", label, max),
                "in" => assert!(label.ends_with(" in") && !label.contains("ft"), "{}", label),
                _ => assert!(label.contains(" ft") && !label.contains("mi"), "{}", label),
            }
        }
    }
}

#[test]
fn test_mile_chart_does_not_switch_to_feet() {
    // 1700 m is just over a mile; smart formatting would put 85 m in feet
    let max = 1700.0;
    assert!(convert_height_smart_imperial(85.0).unwrap().contains("ft"));
    assert!(convert_height_for_grid_imperial(85.0, max).unwrap().ends_with(" mi"));
}

// ==================== Precision ====================

#[test]
fn test_quark_universe_ratio() {
    let ratio = Precision::new(8.7e28)
        .unwrap()
        .divide(&Precision::new(1e-13).unwrap())
        .unwrap()
        .to_f64();
    assert!(ratio.is_finite());
    assert!(ratio > 0.0);
}

#[test]
fn test_division_by_zero_is_an_error() {
    let result = Precision::new(100.0)
        .unwrap()
        .divide(&Precision::new(0.0).unwrap());
    assert!(matches!(result, Err(HeightError::DivisionByZero)));
}

#[test]
fn test_chart_with_quark_and_universe() {
    let heights = [1e-13, 1.8, 8.7e28];
    let grid = GridScale::for_heights(&heights, 800.0, Unit::Cm, &HeightFormatter::default())
        .unwrap();
    assert_eq!(grid.unit, UnitSystem::Kilometer);
    assert!(grid.pixels_per_meter > 0.0);
    assert!(grid.pixel_height(1e-13).unwrap() > 0.0);
    assert!(grid.lines.iter().all(|l| !l.label.contains('e')));
}

#[test]
fn test_empty_chart_uses_default_height() {
    let formatter = HeightFormatter::new(FormatConfig {
        default_chart_height_m: 3.0,
        ..FormatConfig::default()
    })
    .unwrap();
    let grid = GridScale::for_heights(&[], 300.0, Unit::Cm, &formatter).unwrap();
    assert_eq!(grid.max_meters, 3.0);
    assert_eq!(grid.pixels_per_meter, 100.0);
}

// ==================== Formatting ====================

#[test]
fn test_format_number_is_idempotent() {
    for x in [1.7999999999, 324.0, 0.000123456, 8.7e28, 1e-13, 5280.5, 0.3048] {
        let once = format_number(x, None);
        let twice = format_number(once.parse().unwrap(), None);
        assert_eq!(once, twice);
    }
}
