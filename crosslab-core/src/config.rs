//! Serializable run configuration.

use serde::{Deserialize, Serialize};

use crate::signals::CrossoverStrategy;

/// Unique identifier for a backtest run (content-addressable hash).
pub type RunId = String;

fn default_risk_free_rate() -> f64 {
    0.02
}

/// All parameters needed to reproduce a run: strategy periods, window mode,
/// and the risk-free rate used by the Sharpe ratio. Loadable from TOML:
///
/// ```toml
/// risk_free_rate = 0.02
///
/// [strategy]
/// short_period = 3
/// long_period = 10
/// window = "suffix"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub strategy: CrossoverStrategy,
    /// Annualized risk-free rate as a fraction (0.02 = 2%).
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

impl RunConfig {
    /// Deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs share a RunId, which makes result
    /// artifacts comparable across invocations.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_vec(self).expect("RunConfig serialization failed");
        blake3::hash(&json).to_hex().to_string()
    }
}
