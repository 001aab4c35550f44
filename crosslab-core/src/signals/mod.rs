//! Moving-average crossover signal generation.
//!
//! Compares a short-period SMA against a long-period SMA at every price
//! point and emits one binary Long/Short signal per point. "Crossover"
//! refers to the comparison rule, not edge detection: a signal is emitted
//! for every point, not only when the averages cross.

use serde::{Deserialize, Serialize};

use crate::domain::{Position, PricePoint, Signal};
use crate::error::EngineError;
use crate::indicators::sma;

/// Which slice of the series the moving averages are computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Reference behavior: at index `i` the averages are computed over the
    /// suffix `prices[i..]` — the point and everything after it. This is
    /// non-causal (the signal at `i` sees future prices) and the SMA periods
    /// effectively apply at the far end of the series, but it is what the
    /// reference implementation does, so it is the default.
    #[default]
    Suffix,
    /// Conventional causal windows over `prices[..=i]` (the trailing
    /// history ending at the signal's own index).
    Trailing,
}

/// Crossover strategy parameters.
///
/// `short_period < long_period` makes the strategy meaningful but is not
/// enforced; both periods must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverStrategy {
    pub short_period: usize,
    pub long_period: usize,
    #[serde(default)]
    pub window: WindowMode,
}

impl CrossoverStrategy {
    pub fn new(short_period: usize, long_period: usize, window: WindowMode) -> Self {
        assert!(short_period >= 1, "short_period must be >= 1");
        assert!(long_period >= 1, "long_period must be >= 1");
        Self {
            short_period,
            long_period,
            window,
        }
    }

    /// One signal per input point, same order and timestamps.
    ///
    /// Long when the short SMA is strictly above the long SMA, Short
    /// otherwise (ties resolve to Short). An empty series yields an empty
    /// signal list.
    pub fn generate_signals(&self, series: &[PricePoint]) -> Result<Vec<Signal>, EngineError> {
        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        let mut signals = Vec::with_capacity(series.len());

        for (i, point) in series.iter().enumerate() {
            let window = match self.window {
                WindowMode::Suffix => &prices[i..],
                WindowMode::Trailing => &prices[..=i],
            };
            let short_ma = sma(window, self.short_period)?;
            let long_ma = sma(window, self.long_period)?;

            let position = if short_ma > long_ma {
                Position::Long
            } else {
                Position::Short
            };
            signals.push(Signal::new(point.timestamp, position));
        }

        Ok(signals)
    }
}
