//! Domain types for CrossLab.

pub mod position;
pub mod price;
pub mod signal;
pub mod trade;

pub use position::Position;
pub use price::PricePoint;
pub use signal::Signal;
pub use trade::{Trade, TradeExit};
