//! Trade — a position opened by a signal, possibly closed by the opposite one.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Exit leg of a trade, filled exactly once when the opposing signal arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeExit {
    pub price: f64,
    pub time: i64,
}

/// A trade record: entry leg always present, exit leg optional.
///
/// The original encoding used `exit_price = 0.0` / `exit_time = 0` as "not
/// yet closed" sentinels; those values collide with legitimate data, so the
/// exit leg is an `Option` instead. The sentinel numerics are preserved at
/// the accessor level: [`Trade::exit_price`] and [`Trade::exit_time`] return
/// `0.0` / `0` for an open trade, which keeps per-trade returns identical to
/// the reference behavior (an unclosed Long yields -1.0, an unclosed Short
/// +1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub position: Position,
    pub entry_price: f64,
    pub entry_time: i64,
    pub exit: Option<TradeExit>,
}

impl Trade {
    /// Open a new trade at the given entry leg.
    pub fn open(position: Position, entry_price: f64, entry_time: i64) -> Self {
        Self {
            position,
            entry_price,
            entry_time,
            exit: None,
        }
    }

    /// Fill the exit leg. Called exactly once, when the opposing signal
    /// arrives; a second close would overwrite the first and is a simulator
    /// bug, hence the debug assertion.
    pub fn close(&mut self, price: f64, time: i64) {
        debug_assert!(self.exit.is_none(), "trade closed twice");
        self.exit = Some(TradeExit { price, time });
    }

    pub fn is_closed(&self) -> bool {
        self.exit.is_some()
    }

    /// Exit price, or the sentinel `0.0` while the trade is open.
    pub fn exit_price(&self) -> f64 {
        self.exit.map_or(0.0, |e| e.price)
    }

    /// Exit time, or the sentinel `0` while the trade is open.
    pub fn exit_time(&self) -> i64 {
        self.exit.map_or(0, |e| e.time)
    }

    /// Fractional return on the trade.
    ///
    /// Long: (exit - entry) / entry. Short: (entry - exit) / entry.
    /// Flat trades are never constructed by the simulator but return 0.0
    /// rather than erroring. Open trades use the sentinel exit price.
    pub fn return_fraction(&self) -> f64 {
        match self.position {
            Position::Long => (self.exit_price() - self.entry_price) / self.entry_price,
            Position::Short => (self.entry_price - self.exit_price()) / self.entry_price,
            Position::Flat => 0.0,
        }
    }

    pub fn is_winner(&self) -> bool {
        self.return_fraction() > 0.0
    }
}
