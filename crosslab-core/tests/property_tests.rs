//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. SMA equals the mean of the trailing window (all elements when short)
//! 2. Signal generation is one-to-one with the input series
//! 3. The simulator never holds more than one open trade
//! 4. Generated signals never miss a price lookup
//! 5. Trade count is bounded by the number of state transitions

use proptest::prelude::*;

use crosslab_core::domain::{Position, PricePoint, Signal};
use crosslab_core::engine::simulate_trades;
use crosslab_core::indicators::sma;
use crosslab_core::signals::{CrossoverStrategy, WindowMode};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_prices() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(10.0..500.0_f64, 1..120)
}

fn arb_period() -> impl Strategy<Value = usize> {
    1..30_usize
}

fn arb_window_mode() -> impl Strategy<Value = WindowMode> {
    prop_oneof![Just(WindowMode::Suffix), Just(WindowMode::Trailing)]
}

fn arb_side() -> impl Strategy<Value = Position> {
    prop_oneof![Just(Position::Long), Just(Position::Short)]
}

fn to_series(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PricePoint::new(i as i64, p))
        .collect()
}

// ── 1. SMA window semantics ──────────────────────────────────────────

proptest! {
    /// The SMA of a series equals the naive mean of its last P elements,
    /// or of the whole series when it is shorter than P.
    #[test]
    fn sma_matches_naive_mean(values in arb_prices(), period in arb_period()) {
        let result = sma(&values, period).unwrap();
        let start = values.len().saturating_sub(period);
        let window = &values[start..];
        let expected = window.iter().sum::<f64>() / window.len() as f64;
        prop_assert!((result - expected).abs() < 1e-9);
    }
}

// ── 2. Signal generation shape ───────────────────────────────────────

proptest! {
    /// Exactly one signal per input point, same timestamps, same order,
    /// and never Flat.
    #[test]
    fn signals_one_per_point(
        prices in arb_prices(),
        short in arb_period(),
        long in arb_period(),
        window in arb_window_mode(),
    ) {
        let series = to_series(&prices);
        let strategy = CrossoverStrategy::new(short, long, window);
        let signals = strategy.generate_signals(&series).unwrap();

        prop_assert_eq!(signals.len(), series.len());
        for (signal, point) in signals.iter().zip(&series) {
            prop_assert_eq!(signal.timestamp, point.timestamp);
            prop_assert_ne!(signal.position, Position::Flat);
        }
    }
}

// ── 3 & 4 & 5. Simulator invariants ──────────────────────────────────

proptest! {
    /// Feeding generated signals back into the simulator never hits a price
    /// lookup failure, and at most one trade in the output is open.
    #[test]
    fn generated_signals_simulate_cleanly(
        prices in arb_prices(),
        short in arb_period(),
        long in arb_period(),
        window in arb_window_mode(),
    ) {
        let series = to_series(&prices);
        let strategy = CrossoverStrategy::new(short, long, window);
        let signals = strategy.generate_signals(&series).unwrap();

        let trades = simulate_trades(&series, &signals).unwrap();
        let open = trades.iter().filter(|t| !t.is_closed()).count();
        prop_assert!(open <= 1);
    }

    /// Trade count is bounded by the number of state transitions in the
    /// signal stream (Flat→side plus side→opposite-side changes).
    #[test]
    fn trade_count_bounded_by_transitions(
        prices in arb_prices(),
        sides in prop::collection::vec(arb_side(), 1..120),
    ) {
        let series = to_series(&prices);
        let n = series.len().min(sides.len());
        let signals: Vec<Signal> = (0..n)
            .map(|i| Signal::new(series[i].timestamp, sides[i]))
            .collect();

        let trades = simulate_trades(&series, &signals).unwrap();

        let mut transitions = 0;
        let mut state = Position::Flat;
        for signal in &signals {
            if signal.position != state {
                transitions += 1;
                state = signal.position;
            }
        }
        prop_assert!(trades.len() <= transitions);

        // Trades come out in opening order.
        for pair in trades.windows(2) {
            prop_assert!(pair[0].entry_time <= pair[1].entry_time);
        }
    }
}
