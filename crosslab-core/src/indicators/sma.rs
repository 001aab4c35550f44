//! Simple Moving Average (SMA).
//!
//! Mean of the last `period` values of a sequence. Shorter sequences use
//! every value they have; an empty sequence is an error rather than a NaN.

use crate::error::EngineError;

/// Arithmetic mean of the trailing `period` elements of `values`.
///
/// If `values` has fewer than `period` elements the whole slice is averaged.
/// Errors with [`EngineError::EmptySeries`] on an empty slice — the mean of
/// nothing is a division by zero, surfaced explicitly instead of propagating
/// NaN through the pipeline.
pub fn sma(values: &[f64], period: usize) -> Result<f64, EngineError> {
    if values.is_empty() {
        return Err(EngineError::EmptySeries);
    }
    let window = &values[values.len().saturating_sub(period)..];
    Ok(window.iter().sum::<f64>() / window.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_trailing_window() {
        // mean(3, 4, 5) = 4.0
        let result = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_approx(result, 4.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_period_longer_than_series_uses_all() {
        let result = sma(&[2.0, 4.0], 10).unwrap();
        assert_approx(result, 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_period_equal_to_series_len() {
        let result = sma(&[1.0, 2.0, 3.0], 3).unwrap();
        assert_approx(result, 2.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_period_one_is_last_value() {
        let result = sma(&[10.0, 20.0, 30.0], 1).unwrap();
        assert_approx(result, 30.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_empty_series_errors() {
        assert_eq!(sma(&[], 3), Err(EngineError::EmptySeries));
    }
}
