//! Signal — one directional reading per price point.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A directional signal at a single timestamp.
///
/// The generator emits exactly one signal per input price point, in input
/// order. Signals are binary: `position` is always `Long` or `Short`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub timestamp: i64,
    pub position: Position,
}

impl Signal {
    pub fn new(timestamp: i64, position: Position) -> Self {
        Self {
            timestamp,
            position,
        }
    }
}
