//! Demonstrates enabling verbose logging for goertzel.
use goertzel::filter::Filter;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut flt = Filter::new(1000.0, 8000.0).unwrap();
    let samples: Vec<f64> = (0..96)
        .map(|i| (2.0 * std::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
        .collect();
    let power = flt.process(&samples).unwrap();
    println!("power: {power}");
}
