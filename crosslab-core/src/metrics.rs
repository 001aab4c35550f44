//! Performance metrics — pure functions over the trade list.
//!
//! Trade list in, scalars out. No dependencies on the simulator or signal
//! generator.

use serde::{Deserialize, Serialize};

use crate::domain::Trade;
use crate::error::EngineError;

/// Per-trade fractional returns, in trade order.
///
/// Long: (exit - entry) / entry. Short: (entry - exit) / entry. Open trades
/// are valued at the sentinel exit price of 0.0, matching the reference
/// numerics (an unclosed Long reads as -1.0); callers that want to exclude
/// open trades should filter with [`Trade::is_closed`] first.
pub fn calculate_returns(trades: &[Trade]) -> Vec<f64> {
    trades.iter().map(Trade::return_fraction).collect()
}

/// Arithmetic mean of a return series. Errors on an empty series.
pub fn mean_return(returns: &[f64]) -> Result<f64, EngineError> {
    if returns.is_empty() {
        return Err(EngineError::EmptySeries);
    }
    Ok(returns.iter().sum::<f64>() / returns.len() as f64)
}

/// Sharpe ratio: (mean - risk_free_rate) / population standard deviation.
///
/// Variance divides by N, not N-1. Errors with
/// [`EngineError::EmptySeries`] when `returns` is empty and
/// [`EngineError::ZeroVariance`] when the standard deviation is exactly zero
/// (a single trade, or all-identical returns).
pub fn calculate_sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Result<f64, EngineError> {
    let mean = mean_return(returns)?;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return Err(EngineError::ZeroVariance);
    }
    Ok((mean - risk_free_rate) / std_dev)
}

/// Aggregate statistics for a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Mean per-trade return (fractional, e.g. 0.05 = 5%).
    pub mean_return: f64,
    /// Sharpe ratio over per-trade returns. `None` when undefined
    /// (zero variance); an empty trade list is an error instead.
    pub sharpe: Option<f64>,
    pub trade_count: usize,
    pub closed_trades: usize,
    /// Fraction of closed trades with a positive return.
    pub win_rate: f64,
}

impl PerformanceSummary {
    /// Compute all statistics from the trade list.
    ///
    /// Errors on an empty trade list. A zero-variance Sharpe is reported as
    /// `None` rather than failing the whole run: the mean return is still
    /// meaningful for a single-trade backtest.
    pub fn compute(trades: &[Trade], risk_free_rate: f64) -> Result<Self, EngineError> {
        let returns = calculate_returns(trades);
        let mean = mean_return(&returns)?;
        let sharpe = match calculate_sharpe_ratio(&returns, risk_free_rate) {
            Ok(value) => Some(value),
            Err(EngineError::ZeroVariance) => None,
            Err(other) => return Err(other),
        };

        let closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        let winners = closed.iter().filter(|t| t.is_winner()).count();
        let win_rate = if closed.is_empty() {
            0.0
        } else {
            winners as f64 / closed.len() as f64
        };

        Ok(Self {
            mean_return: mean,
            sharpe,
            trade_count: trades.len(),
            closed_trades: closed.len(),
            win_rate,
        })
    }
}
