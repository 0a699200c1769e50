//! Goertzel algorithm: recursive single-frequency power detector
//! no_std compatible

use core::f64::consts::PI;
use libm::cos;

/// Anything less than this is meaningless.
///
/// Raw magnitudes below this floor are clamped up before normalization so
/// the subsequent logarithmic dBm conversion never sees a non-positive
/// power. Reference implementations use exactly `1e-9`; keep it bit-exact
/// for output compatibility.
pub const EPSILON: f64 = 1e-9;

/// Errors that can occur while configuring or running a Goertzel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoertzelError {
    /// The sampling frequency is zero or not finite, so no coefficient can
    /// be derived from it.
    InvalidSampleRate,
    /// A batch of zero samples was offered; the `n²` normalization would
    /// divide by zero.
    EmptyInput,
    /// A non-positive power was handed to the dBm conversion, outside the
    /// domain of `log10`.
    NonPositivePower,
}

impl core::fmt::Display for GoertzelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GoertzelError::InvalidSampleRate => {
                write!(f, "sample rate must be nonzero and finite")
            }
            GoertzelError::EmptyInput => write!(f, "input sample batch is empty"),
            GoertzelError::NonPositivePower => {
                write!(f, "power must be positive for dBm conversion")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GoertzelError {}

/// The two most recent outputs of the Goertzel recursion.
///
/// This is the minimal state needed to continue the recursion across sample
/// batches. It is a plain value type: copy it, zero it, pass it by exclusive
/// reference into [`kernel`]. No sharing, no aliasing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    /// Previous recursion output.
    pub prev1: f64,
    /// Output before the previous one.
    pub prev2: f64,
}

impl State {
    /// A zeroed state, ready for a new measurement window.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Derive the Goertzel coefficient `2*cos(2π*f/fs)` for a target frequency
/// `target_freq` and sampling frequency `sample_rate`, both in Hz.
///
/// Pure function, no validation: a zero `sample_rate` or a `target_freq`
/// outside the Nyquist range `0..=sample_rate/2` yields a mathematically
/// well-defined but physically meaningless coefficient. [`Filter::new`]
/// performs the fail-fast checks.
pub fn coefficient(target_freq: f64, sample_rate: f64) -> f64 {
    2.0 * cos(2.0 * PI * target_freq / sample_rate)
}

/// Run the second-order IIR recursion at the heart of the Goertzel
/// algorithm over `samples`, updating `state` in place.
///
/// For each sample `x`: `t = coeff*prev1 - prev2 + x`, then the previous
/// outputs shift. The recursion is order-sensitive; samples must be fed in
/// input order. O(n) time, O(1) state, no allocation.
pub fn kernel(samples: &[f64], coeff: f64, state: &mut State) {
    for &x in samples {
        let t = coeff * state.prev1 - state.prev2 + x;
        state.prev2 = state.prev1;
        state.prev1 = t;
    }
}

/// Compute the power of the signal accumulated in `state`, normalized by
/// the number of samples `n` that produced it.
///
/// The raw magnitude `prev1² + prev2² - coeff*prev1*prev2` is clamped to
/// [`EPSILON`] and divided by `n²` (the raw magnitude grows linearly with
/// the window length, so its square grows with `n²`).
///
/// Returns [`GoertzelError::EmptyInput`] when `n` is zero.
pub fn power(coeff: f64, state: State, n: usize) -> Result<f64, GoertzelError> {
    if n == 0 {
        return Err(GoertzelError::EmptyInput);
    }
    let mut raw =
        state.prev1 * state.prev1 + state.prev2 * state.prev2 - coeff * state.prev1 * state.prev2;
    if raw < EPSILON {
        raw = EPSILON;
    }
    let n = n as f64;
    Ok(raw / (n * n))
}

/// A stateful Goertzel filter for one target frequency.
///
/// Construct once per detection session, feed batches through
/// [`process`](Filter::process), and [`reset`](Filter::reset) between
/// independent measurement windows. The coefficient is derived once at
/// construction and never recomputed.
///
/// # Example
/// ```
/// use goertzel::filter::Filter;
///
/// let mut flt = Filter::new(1000.0, 8000.0).unwrap();
/// let samples: Vec<f64> = (0..96)
///     .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
///     .collect();
/// let power = flt.process(&samples).unwrap();
/// assert!(power > 0.2);
/// ```
#[derive(Debug)]
pub struct Filter {
    freq: f64,
    sample_rate: f64,
    coeff: f64,
    state: State,
}

impl Filter {
    /// Build a filter for `target_freq` Hz over a signal sampled at
    /// `sample_rate` Hz.
    ///
    /// Returns [`GoertzelError::InvalidSampleRate`] when `sample_rate` is
    /// zero or not finite. The target frequency is not range-checked;
    /// frequencies above `sample_rate / 2` alias and give meaningless
    /// readings.
    pub fn new(target_freq: f64, sample_rate: f64) -> Result<Self, GoertzelError> {
        if sample_rate == 0.0 || !sample_rate.is_finite() {
            return Err(GoertzelError::InvalidSampleRate);
        }
        let coeff = coefficient(target_freq, sample_rate);
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "goertzel filter: f={} Hz, fs={} Hz, coeff={}",
            target_freq,
            sample_rate,
            coeff
        );
        Ok(Self {
            freq: target_freq,
            sample_rate,
            coeff,
            state: State::new(),
        })
    }

    /// Zero the accumulator state for a new measurement window. The
    /// coefficient stays; no reconstruction needed.
    pub fn reset(&mut self) {
        self.state = State::new();
    }

    /// The target frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.freq
    }

    /// The sampling frequency in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// The derived recursion coefficient `2*cos(2π*f/fs)`.
    pub fn coefficient(&self) -> f64 {
        self.coeff
    }

    /// Fold a batch of samples into the filter and return the power
    /// estimate at the target frequency.
    ///
    /// Returns [`GoertzelError::EmptyInput`] for an empty batch.
    ///
    /// # Normalization caveat
    /// The power is normalized by this batch's length only, while the
    /// accumulator state persists across calls. Calling `process` several
    /// times without [`reset`](Filter::reset) therefore accumulates state
    /// but divides by the wrong `n`, skewing the reading. This matches the
    /// reference implementations, which assume one `process` call per
    /// measurement window; call `reset` between windows.
    pub fn process(&mut self, samples: &[f64]) -> Result<f64, GoertzelError> {
        if samples.is_empty() {
            return Err(GoertzelError::EmptyInput);
        }
        kernel(samples, self.coeff, &mut self.state);
        power(self.coeff, self.state, samples.len())
    }
}

/// Measure the power of `target_freq` in a whole buffer without keeping a
/// filter around.
pub fn detect_power(
    samples: &[f64],
    target_freq: f64,
    sample_rate: f64,
) -> Result<f64, GoertzelError> {
    if sample_rate == 0.0 || !sample_rate.is_finite() {
        return Err(GoertzelError::InvalidSampleRate);
    }
    if samples.is_empty() {
        return Err(GoertzelError::EmptyInput);
    }
    let coeff = coefficient(target_freq, sample_rate);
    let mut state = State::new();
    kernel(samples, coeff, &mut state);
    power(coeff, state, samples.len())
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn coefficient_matches_closed_form() {
        // 2*cos(2π*1000/8000) = 2*cos(π/4) = √2
        let k = coefficient(1000.0, 8000.0);
        assert!((k - core::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((coefficient(0.0, 8000.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_batch_power_is_floor_over_n_squared() {
        let mut flt = Filter::new(440.0, 8000.0).unwrap();
        let p = flt.process(&[0.0; 4]).unwrap();
        assert_eq!(p, EPSILON / 16.0);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut flt = Filter::new(440.0, 8000.0).unwrap();
        assert_eq!(flt.process(&[]).unwrap_err(), GoertzelError::EmptyInput);
        assert_eq!(power(1.0, State::new(), 0).unwrap_err(), GoertzelError::EmptyInput);
    }

    #[test]
    fn zero_or_nan_sample_rate_is_rejected() {
        assert_eq!(
            Filter::new(1000.0, 0.0).unwrap_err(),
            GoertzelError::InvalidSampleRate
        );
        assert_eq!(
            Filter::new(1000.0, f64::NAN).unwrap_err(),
            GoertzelError::InvalidSampleRate
        );
        assert_eq!(
            detect_power(&[1.0], 1000.0, f64::INFINITY).unwrap_err(),
            GoertzelError::InvalidSampleRate
        );
    }

    #[test]
    fn tone_survives_additive_noise() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(42);
        let tone: Vec<f64> = (0..400)
            .map(|i| {
                (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin()
                    + rng.gen_range(-0.1..0.1)
            })
            .collect();
        let p = detect_power(&tone, 1000.0, 8000.0).unwrap();
        // noise floor perturbs the 0.25 ideal only slightly
        assert!((p - 0.25).abs() < 0.05, "power = {}", p);
    }

    #[test]
    fn detect_power_matches_filter() {
        let samples: Vec<f64> = (0..64)
            .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
            .collect();
        let mut flt = Filter::new(1000.0, 8000.0).unwrap();
        let a = flt.process(&samples).unwrap();
        let b = detect_power(&samples, 1000.0, 8000.0).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_coefficient_stays_in_range(f in 0.0f64..24_000.0, fs in 1.0f64..96_000.0) {
            let k = coefficient(f, fs);
            prop_assert!((-2.0..=2.0).contains(&k));
        }

        #[test]
        fn prop_reset_equals_fresh_filter(ref signal in proptest::collection::vec(-100.0f64..100.0, 1..64)) {
            let mut used = Filter::new(1209.0, 8000.0).unwrap();
            used.process(signal).unwrap();
            used.reset();
            let mut fresh = Filter::new(1209.0, 8000.0).unwrap();
            prop_assert_eq!(
                used.process(signal).unwrap(),
                fresh.process(signal).unwrap()
            );
        }

        #[test]
        fn prop_power_is_never_nan_or_negative(ref signal in proptest::collection::vec(-1000.0f64..1000.0, 1..64)) {
            let p = detect_power(signal, 697.0, 8000.0).unwrap();
            prop_assert!(p.is_finite());
            prop_assert!(p > 0.0);
        }
    }
}
