//! PricePoint — the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// A single price observation: one value at one timestamp.
///
/// Series are supplied by the caller ordered by ascending timestamp; the
/// engine never sorts. Timestamps are opaque integers (the synthetic
/// generator uses epoch seconds, tests often use small ordinals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Basic sanity check: price is finite and positive.
    pub fn is_sane(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sane_point() {
        assert!(PricePoint::new(1, 100.0).is_sane());
    }

    #[test]
    fn detects_nan_price() {
        assert!(!PricePoint::new(1, f64::NAN).is_sane());
    }

    #[test]
    fn detects_nonpositive_price() {
        assert!(!PricePoint::new(1, 0.0).is_sane());
        assert!(!PricePoint::new(1, -3.5).is_sane());
    }

    #[test]
    fn serialization_roundtrip() {
        let point = PricePoint::new(1_700_000_000, 412.37);
        let json = serde_json::to_string(&point).unwrap();
        let deser: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, deser);
    }
}
