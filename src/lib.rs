//! # goertzel - single-frequency tone detection for Rust
//!
//! An implementation of the [Goertzel algorithm](https://en.wikipedia.org/wiki/Goertzel_algorithm):
//! a recursive technique for computing the DFT coefficient at one target
//! frequency, much cheaper than a full transform when only one frequency bin
//! matters. Typical use is tone detection in telephony signaling (DTMF,
//! call-progress tones), where signal level is reported in dBm against the
//! usual 600 Ω reference impedance.
//!
//! ## Features
//!
//! - **`no_std` core**: all math goes through [`libm`], no allocation anywhere
//! - **Stateful filter**: accumulate batches, reset between measurement windows
//! - **Sample-by-sample streaming**: fixed-window detection without buffering
//! - **One-shot helpers**: measure a whole buffer in a single call
//! - **Telephony dBm reporting**: bit-exact `1e-9` power floor and 600 Ω reference
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for the error type
//! - `internal-tests`: enable in-module property tests (proptest)
//! - `verbose-logging`: debug-level traces via the `log` crate
//!
//! ## Example
//!
//! ```
//! use goertzel::filter::Filter;
//! use goertzel::dbm::dbm;
//!
//! // Detect a 1 kHz tone in a signal sampled at 8 kHz.
//! let mut flt = Filter::new(1000.0, 8000.0).unwrap();
//! let samples: Vec<f64> = (0..96)
//!     .map(|i| (2.0 * core::f64::consts::PI * 1000.0 * i as f64 / 8000.0).sin())
//!     .collect();
//! let power = flt.process(&samples).unwrap();
//! let level = dbm(power).unwrap();
//! assert!(level.is_finite());
//! ```
//!
//! ## Concurrency
//!
//! A filter instance has one logical owner and is driven sequentially. For
//! several frequencies at once, build one filter per frequency; instances
//! share no state.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

/// Coefficient derivation, the recursive kernel, power computation, and the
/// stateful [`Filter`](filter::Filter) object.
pub mod filter;

/// Power to decibel-milliwatt conversion against the 600 Ω telephony
/// reference.
pub mod dbm;

/// Sample-by-sample detection over fixed-length windows.
pub mod stream;

pub use dbm::{dbm, detect_dbm};
pub use filter::{coefficient, detect_power, kernel, power, Filter, GoertzelError, State, EPSILON};
pub use stream::GoertzelStream;
