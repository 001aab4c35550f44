//! Data edges: synthetic series generation and CSV ingest/export.

pub mod csv_io;
pub mod synthetic;

pub use csv_io::{read_series, write_trades};
pub use synthetic::{generate_series, SyntheticConfig};
