//! CrossLab Core — moving-average crossover backtesting engine.
//!
//! The pipeline is a deterministic single-pass batch transformation over an
//! in-memory price series:
//!
//! 1. [`indicators::sma`] — simple moving average over a value window
//! 2. [`signals::CrossoverStrategy`] — one Long/Short signal per price point
//! 3. [`engine::simulate_trades`] — position state machine → trade records
//! 4. [`metrics`] — per-trade returns and Sharpe ratio
//!
//! Everything is a pure function of its arguments: no I/O in the engine, no
//! shared mutable state, errors abort the whole run.
//!
//! The signal generator's default windowing is the reference
//! implementation's non-causal suffix scheme; see
//! [`signals::WindowMode`] for the conventional trailing alternative.

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod metrics;
pub mod signals;

pub use config::{RunConfig, RunId};
pub use engine::{run_backtest, BacktestResult};
pub use error::EngineError;
