//! Sample-by-sample Goertzel detection over fixed-length windows
//! no_std compatible

use crate::dbm::dbm;
use crate::filter::{coefficient, power, GoertzelError, State};

/// Streaming Goertzel helper that accepts one sample at a time and yields a
/// dBm reading each time a full window has been seen.
///
/// Useful when samples arrive individually (e.g. straight off an ADC) and
/// buffering a whole window first is not wanted.
///
/// # Example
/// ```
/// use goertzel::stream::GoertzelStream;
///
/// let mut stream = GoertzelStream::new(1000.0, 8000.0, 96).unwrap();
/// let mut level = None;
/// for i in 0..96 {
///     let x = (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin();
///     level = stream.push(x);
/// }
/// assert!(level.unwrap().is_finite());
/// ```
#[derive(Debug)]
pub struct GoertzelStream {
    coeff: f64,
    window_len: usize,
    count: usize,
    state: State,
}

impl GoertzelStream {
    /// Build a streaming detector for `target_freq` Hz at `sample_rate` Hz,
    /// reporting once every `window_len` samples.
    ///
    /// Returns [`GoertzelError::InvalidSampleRate`] for a zero or non-finite
    /// sample rate and [`GoertzelError::EmptyInput`] for a zero window.
    pub fn new(
        target_freq: f64,
        sample_rate: f64,
        window_len: usize,
    ) -> Result<Self, GoertzelError> {
        if sample_rate == 0.0 || !sample_rate.is_finite() {
            return Err(GoertzelError::InvalidSampleRate);
        }
        if window_len == 0 {
            return Err(GoertzelError::EmptyInput);
        }
        Ok(Self {
            coeff: coefficient(target_freq, sample_rate),
            window_len,
            count: 0,
            state: State::new(),
        })
    }

    /// Feed one sample. Returns `Some(dbm)` when this sample completes a
    /// window, `None` otherwise.
    ///
    /// Completing a window rewinds only the sample counter; the accumulator
    /// state carries into the next window, as in the reference
    /// implementation. Call [`reset`](GoertzelStream::reset) between windows
    /// for independent measurements.
    pub fn push(&mut self, sample: f64) -> Option<f64> {
        let t = self.coeff * self.state.prev1 - self.state.prev2 + sample;
        self.state.prev2 = self.state.prev1;
        self.state.prev1 = t;
        self.count += 1;
        if self.count == self.window_len {
            self.count = 0;
            // window_len is nonzero and power is floored at EPSILON, so
            // neither conversion can fail
            let level = power(self.coeff, self.state, self.window_len)
                .and_then(dbm)
                .ok();
            #[cfg(feature = "verbose-logging")]
            if let Some(v) = level {
                log::debug!("goertzel window complete: {} dBm", v);
            }
            return level;
        }
        None
    }

    /// The number of samples in one measurement window.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Zero the accumulator state and the sample counter.
    pub fn reset(&mut self) {
        self.count = 0;
        self.state = State::new();
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let mut stream = GoertzelStream::new(0.0, 8000.0, 10).unwrap();
        for _ in 0..9 {
            assert_eq!(stream.push(5.0), None);
        }
        // DC at amplitude 5 over 10 samples: power 25, dBm ~ 19.208
        let level = stream.push(5.0).unwrap();
        assert!((level - 19.208187539523753).abs() < 1e-9);
    }

    #[test]
    fn zero_window_is_rejected() {
        assert_eq!(
            GoertzelStream::new(1000.0, 8000.0, 0).unwrap_err(),
            GoertzelError::EmptyInput
        );
    }

    #[test]
    fn reset_gives_independent_windows() {
        let mut stream = GoertzelStream::new(0.0, 8000.0, 4).unwrap();
        let mut first = None;
        for _ in 0..4 {
            first = stream.push(1.0);
        }
        stream.reset();
        let mut second = None;
        for _ in 0..4 {
            second = stream.push(1.0);
        }
        assert_eq!(first.unwrap(), second.unwrap());
    }
}
