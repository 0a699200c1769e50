// Test intent: verifies dBm conversion values, domain errors, and the
// one-shot dBm helper.

use goertzel::dbm::{dbm, detect_dbm};
use goertzel::filter::GoertzelError;

#[test]
fn matches_reference_formula() {
    // 10 * log10(2 * p * 1000 / 600)
    let p: f64 = 0.25;
    let expected = 10.0 * (2.0 * p * 1000.0 / 600.0).log10();
    assert!((dbm(p).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn one_milliwatt_reference_level() {
    // 2 * p * 1000 / 600 == 1  =>  0 dBm
    assert!(dbm(0.3).unwrap().abs() < 1e-12);
}

#[test]
fn increasing_power_increases_level() {
    let mut last = dbm(1e-9).unwrap();
    for p in [1e-6, 1e-3, 1.0, 1e3] {
        let level = dbm(p).unwrap();
        assert!(level > last);
        last = level;
    }
}

#[test]
fn non_positive_power_is_a_domain_error() {
    assert_eq!(dbm(0.0).unwrap_err(), GoertzelError::NonPositivePower);
    assert_eq!(dbm(-0.5).unwrap_err(), GoertzelError::NonPositivePower);
}

#[test]
fn detect_dbm_composes_power_and_conversion() {
    let samples: Vec<f64> = (0..96)
        .map(|i| (2.0 * std::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
        .collect();
    let p = goertzel::detect_power(&samples, 1000.0, 8000.0).unwrap();
    let level = detect_dbm(&samples, 1000.0, 8000.0).unwrap();
    assert_eq!(level, dbm(p).unwrap());
}

#[test]
fn detect_dbm_rejects_empty_input() {
    assert_eq!(
        detect_dbm(&[], 1000.0, 8000.0).unwrap_err(),
        GoertzelError::EmptyInput
    );
}

/// The EPSILON floor in the power computation keeps dBm defined even for
/// silence; the result is finite, never -inf.
#[test]
fn silence_still_produces_a_finite_level() {
    let level = detect_dbm(&[0.0; 50], 1000.0, 8000.0).unwrap();
    assert!(level.is_finite());
    assert!(level < -100.0);
}
