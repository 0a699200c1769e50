//! DTMF-style tone detection.
//!
//! Runs one streaming detector per DTMF row/column frequency against a
//! mixed two-tone signal and prints the level each detector reports.

use goertzel::stream::GoertzelStream;

const SAMPLE_RATE: f64 = 8000.0;
const WINDOW: usize = 205; // classic DTMF block size at 8 kHz
const DTMF_FREQS: [f64; 8] = [697.0, 770.0, 852.0, 941.0, 1209.0, 1336.0, 1477.0, 1633.0];

fn main() {
    println!("=== DTMF tone detection ===\n");

    // digit '5' = 770 Hz + 1336 Hz
    let signal: Vec<f64> = (0..WINDOW)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            (2.0 * std::f64::consts::PI * 770.0 * t).sin()
                + (2.0 * std::f64::consts::PI * 1336.0 * t).sin()
        })
        .collect();

    for freq in DTMF_FREQS {
        let mut detector = GoertzelStream::new(freq, SAMPLE_RATE, WINDOW).unwrap();
        let mut level = None;
        for &x in &signal {
            level = detector.push(x);
        }
        println!("{freq:7.1} Hz: {:8.2} dBm", level.unwrap());
    }
}
