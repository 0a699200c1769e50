//! Power to decibel-milliwatt (dBm) conversion
//! no_std compatible

use libm::log10;

use crate::filter::{detect_power, GoertzelError};

/// Reference impedance in ohms for the dBm conversion, the usual value in
/// audio/telephony. Baked into the formula for compatibility with reference
/// implementations.
const REFERENCE_OHMS: f64 = 600.0;

/// Convert a power ratio into dBm (decibel-milliwatts), a power ratio in dB
/// referenced to one milliwatt across a 600 Ω telephony impedance.
///
/// The conversion is `10 * log10(2 * power * 1000 / 600)` and is
/// monotonically increasing in `power`.
///
/// Returns [`GoertzelError::NonPositivePower`] for `power <= 0`, which is
/// outside the domain of `log10`. Powers produced by
/// [`power`](crate::filter::power) are floored at
/// [`EPSILON`](crate::filter::EPSILON) and never trip this.
pub fn dbm(power: f64) -> Result<f64, GoertzelError> {
    if power <= 0.0 {
        return Err(GoertzelError::NonPositivePower);
    }
    Ok(10.0 * log10(2.0 * power * 1000.0 / REFERENCE_OHMS))
}

/// Measure the level of `target_freq` in a whole buffer and report it in
/// dBm. One-shot counterpart of running a
/// [`Filter`](crate::filter::Filter) over a single window.
pub fn detect_dbm(
    samples: &[f64],
    target_freq: f64,
    sample_rate: f64,
) -> Result<f64, GoertzelError> {
    dbm(detect_power(samples, target_freq, sample_rate)?)
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_value() {
        // 25.0 -> 10*log10(50000/600)
        let v = dbm(25.0).unwrap();
        assert!((v - 19.208187539523753).abs() < 1e-9);
    }

    #[test]
    fn non_positive_power_is_rejected() {
        assert_eq!(dbm(0.0).unwrap_err(), GoertzelError::NonPositivePower);
        assert_eq!(dbm(-1.0).unwrap_err(), GoertzelError::NonPositivePower);
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_power(p in 1e-12f64..1e6) {
            let lo = dbm(p).unwrap();
            let hi = dbm(p * 2.0).unwrap();
            prop_assert!(hi > lo);
            prop_assert!(lo.is_finite());
        }
    }
}
