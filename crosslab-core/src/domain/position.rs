//! Position side — the directional state of the strategy.

use serde::{Deserialize, Serialize};

/// Directional bias: no position, bullish, or bearish.
///
/// `Flat` is the simulator's initial state only. The transition table has no
/// rule returning to `Flat`, so once a Long or Short position opens the state
/// alternates between the two sides for the rest of the run. Generated
/// signals are always `Long` or `Short`, never `Flat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Long,
    Short,
    Flat,
}

impl Position {
    /// The opposite directional side. `Flat` has no opposite.
    pub fn opposite(&self) -> Option<Position> {
        match self {
            Position::Long => Some(Position::Short),
            Position::Short => Some(Position::Long),
            Position::Flat => None,
        }
    }
}
