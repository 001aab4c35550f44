//! Trade simulator — turns a signal stream into trade records.
//!
//! A single left-to-right pass over the signals drives a position state
//! machine. State is threaded through an explicit accumulator rather than
//! shared mutable state.

use std::collections::HashMap;

use crate::domain::{Position, PricePoint, Signal, Trade};
use crate::error::EngineError;

/// Accumulator threaded through the signal fold.
///
/// `open_slot` is the index into `trades` of the currently-open trade, so
/// closing is O(1) — the most recently opened trade is always the one
/// eligible for closing, never found by scanning.
struct SimulatorState {
    position: Position,
    trades: Vec<Trade>,
    open_slot: Option<usize>,
}

impl SimulatorState {
    fn new() -> Self {
        Self {
            position: Position::Flat,
            trades: Vec::new(),
            open_slot: None,
        }
    }

    fn open(&mut self, side: Position, price: f64, time: i64) {
        self.trades.push(Trade::open(side, price, time));
        self.open_slot = Some(self.trades.len() - 1);
        self.position = side;
    }

    fn close(&mut self, price: f64, time: i64) {
        if let Some(slot) = self.open_slot.take() {
            self.trades[slot].close(price, time);
        }
    }
}

/// Run the position state machine over `signals`, pricing each transition
/// from `series` by exact timestamp match.
///
/// Transition table:
///
/// | current | signal   | action                                        |
/// |---------|----------|-----------------------------------------------|
/// | Flat    | Long     | open a Long trade at the signal's price       |
/// | Flat    | Short    | open a Short trade at the signal's price      |
/// | Long    | Short    | close the open trade, state becomes Short     |
/// | Short   | Long     | close the open trade, state becomes Long      |
/// | same    | same     | no-op                                         |
///
/// Direction flips only close — they do not open a trade on the new side.
/// That asymmetry versus the Flat rows is preserved from the reference
/// implementation (after the first flip no trade can ever open again, since
/// Flat is never re-entered). Closing with no open trade is a bare state
/// change.
///
/// A signal timestamp with no matching price point aborts the whole
/// simulation with [`EngineError::PriceNotFound`]; no partial trade list is
/// returned. Trades are returned in opening order; a trade that never saw
/// an opposing signal remains open (exit leg unset).
pub fn simulate_trades(
    series: &[PricePoint],
    signals: &[Signal],
) -> Result<Vec<Trade>, EngineError> {
    let prices: HashMap<i64, f64> = series.iter().map(|p| (p.timestamp, p.price)).collect();

    let mut state = SimulatorState::new();
    for signal in signals {
        if signal.position == state.position {
            continue;
        }
        let price = *prices
            .get(&signal.timestamp)
            .ok_or(EngineError::PriceNotFound {
                timestamp: signal.timestamp,
            })?;

        match state.position {
            Position::Flat => state.open(signal.position, price, signal.timestamp),
            _ => {
                state.close(price, signal.timestamp);
                state.position = signal.position;
            }
        }
    }

    Ok(state.trades)
}
