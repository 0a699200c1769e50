//! Basic Goertzel filter usage.
//!
//! Measures the power and dBm level of a tone at its own frequency.

use goertzel::dbm::dbm;
use goertzel::filter::Filter;

fn main() {
    println!("=== Goertzel basic usage ===\n");

    let sample_rate = 8000.0;
    let target_freq = 1000.0;
    let samples: Vec<f64> = (0..96)
        .map(|i| (2.0 * std::f64::consts::PI * target_freq * i as f64 / sample_rate).sin())
        .collect();

    let mut flt = Filter::new(target_freq, sample_rate).unwrap();
    let power = flt.process(&samples).unwrap();
    let level = dbm(power).unwrap();

    println!("Power at {target_freq} Hz: {power:.6}");
    println!("Level at {target_freq} Hz: {level:.3} dBm");
}
