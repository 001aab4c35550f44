//! CSV ingest and export.
//!
//! Price series come in as `timestamp,price` rows; trades go out as a trade
//! tape for external analysis tools.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::domain::{PricePoint, Trade};

#[derive(Debug, Deserialize)]
struct PriceRow {
    timestamp: i64,
    price: f64,
}

#[derive(Debug, Serialize)]
struct TradeRow<'a> {
    position: &'a str,
    entry_time: i64,
    entry_price: f64,
    exit_time: Option<i64>,
    exit_price: Option<f64>,
    return_pct: f64,
}

/// Read a price series from `timestamp,price` CSV (header required).
///
/// Rows are taken in file order; ordering by ascending timestamp is the
/// caller's contract, not enforced here.
pub fn read_series<R: Read>(reader: R) -> csv::Result<Vec<PricePoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut series = Vec::new();
    for row in csv_reader.deserialize() {
        let row: PriceRow = row?;
        series.push(PricePoint::new(row.timestamp, row.price));
    }
    Ok(series)
}

/// Write the trade tape as CSV.
///
/// Columns: position, entry_time, entry_price, exit_time, exit_price,
/// return_pct. Exit columns are empty for trades still open at the end of
/// the run; return_pct for those uses the sentinel exit numerics.
pub fn write_trades<W: Write>(writer: W, trades: &[Trade]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for trade in trades {
        csv_writer.serialize(TradeRow {
            position: match trade.position {
                crate::domain::Position::Long => "Long",
                crate::domain::Position::Short => "Short",
                crate::domain::Position::Flat => "Flat",
            },
            entry_time: trade.entry_time,
            entry_price: trade.entry_price,
            exit_time: trade.exit.map(|e| e.time),
            exit_price: trade.exit.map(|e| e.price),
            return_pct: trade.return_fraction() * 100.0,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
