//! Pipeline orchestration: price series → signals → trades → statistics.

pub mod simulator;

pub use simulator::simulate_trades;

use serde::{Deserialize, Serialize};

use crate::config::{RunConfig, RunId};
use crate::domain::{PricePoint, Trade};
use crate::error::EngineError;
use crate::metrics::{calculate_returns, PerformanceSummary};

/// Complete result of a single backtest run: trade log, per-trade returns,
/// and aggregate statistics, tagged with the content-addressed run id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestResult {
    pub run_id: RunId,
    pub config: RunConfig,
    pub trades: Vec<Trade>,
    pub returns: Vec<f64>,
    pub summary: PerformanceSummary,
}

/// Run the full pipeline over `series` with the given configuration.
///
/// Data flows strictly left to right; no stage mutates another's input.
/// Errors on an empty series up front (every downstream stage would fail on
/// it anyway), and propagates any stage failure — there are no partial
/// results.
pub fn run_backtest(series: &[PricePoint], config: &RunConfig) -> Result<BacktestResult, EngineError> {
    if series.is_empty() {
        return Err(EngineError::EmptySeries);
    }

    let signals = config.strategy.generate_signals(series)?;
    let trades = simulate_trades(series, &signals)?;
    let returns = calculate_returns(&trades);
    let summary = PerformanceSummary::compute(&trades, config.risk_free_rate)?;

    Ok(BacktestResult {
        run_id: config.run_id(),
        config: *config,
        trades,
        returns,
        summary,
    })
}
