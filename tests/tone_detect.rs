// Test intent: end-to-end detection scenarios with known closed-form
// results (on-target tone, off-target tone, DC).

use goertzel::dbm::dbm;
use goertzel::filter::{coefficient, detect_power, Filter};

fn sine(freq: f64, sample_rate: f64, amplitude: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| amplitude * (2.0 * std::f64::consts::PI * freq * i as f64 / sample_rate).sin())
        .collect()
}

/// 1 kHz @ 8 kHz: coefficient is 2*cos(π/4) = √2.
#[test]
fn coefficient_for_dtmf_style_tone() {
    assert!((coefficient(1000.0, 8000.0) - std::f64::consts::SQRT_2).abs() < 1e-12);
}

/// A unit-amplitude tone at the target frequency over a whole number of
/// cycles measures A²/4 = 0.25, independent of window length.
#[test]
fn on_target_tone_power_is_amplitude_squared_over_four() {
    for n in [96usize, 160, 400] {
        let p = detect_power(&sine(1000.0, 8000.0, 1.0, n), 1000.0, 8000.0).unwrap();
        assert!((p - 0.25).abs() < 1e-6, "n={}: power={}", n, p);
    }
}

/// Power grows with the square of the input amplitude.
#[test]
fn power_is_monotonic_in_amplitude() {
    let single = detect_power(&sine(1000.0, 8000.0, 1.0, 96), 1000.0, 8000.0).unwrap();
    let double = detect_power(&sine(1000.0, 8000.0, 2.0, 96), 1000.0, 8000.0).unwrap();
    assert!(double > single);
    assert!((double / single - 4.0).abs() < 1e-6);
}

/// A tone two bins away contributes (nearly) nothing at the target
/// frequency over whole cycles.
#[test]
fn off_target_tone_is_rejected() {
    let on = detect_power(&sine(1000.0, 8000.0, 1.0, 96), 1000.0, 8000.0).unwrap();
    let off = detect_power(&sine(2000.0, 8000.0, 1.0, 96), 1000.0, 8000.0).unwrap();
    assert!(on > 0.2);
    assert!(off < 1e-6);
}

#[test]
fn tone_level_in_dbm_is_finite() {
    let mut flt = Filter::new(1000.0, 8000.0).unwrap();
    let p = flt.process(&sine(1000.0, 8000.0, 1.0, 100)).unwrap();
    assert!(p > 1e-3); // well above the EPSILON floor
    let level = dbm(p).unwrap();
    assert!(level.is_finite());
}

/// DC case: f = 0 gives coefficient 2, and the recursion degenerates into a
/// running sum. Ten samples of 5.0 accumulate to 50, so the normalized
/// power is 50²/10² = 25 and the level is 10*log10(2*25*1000/600) dBm.
#[test]
fn dc_gain_matches_closed_form() {
    assert_eq!(coefficient(0.0, 8000.0), 2.0);
    let mut flt = Filter::new(0.0, 8000.0).unwrap();
    let p = flt.process(&[5.0; 10]).unwrap();
    assert!((p - 25.0).abs() < 1e-9);
    let level = dbm(p).unwrap();
    assert!((level - 19.208187539523753).abs() < 1e-9);
}
