//! Engine error type shared across the pipeline stages.

/// Errors produced by the signal/simulation/metrics pipeline.
///
/// Any error aborts the whole run; there are no retries and no partial
/// results. Callers are expected to validate inputs (non-empty series,
/// periods >= 1) before invoking the pipeline.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EngineError {
    /// SMA or Sharpe computation invoked on an empty sequence.
    #[error("cannot compute over an empty series")]
    EmptySeries,

    /// A signal timestamp has no matching price point in the source series.
    #[error("no price point found for timestamp {timestamp}")]
    PriceNotFound { timestamp: i64 },

    /// Sharpe ratio denominator is zero (single trade or all-identical returns).
    #[error("zero variance in returns; Sharpe ratio is undefined")]
    ZeroVariance,
}
