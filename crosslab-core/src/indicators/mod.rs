//! Indicator functions.
//!
//! The crossover strategy only needs the SMA. Indicators are pure functions
//! over value slices — no state, no side effects.

pub mod sma;

pub use sma::sma;

#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert two floats are within epsilon of each other.
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual}"
    );
}
