mod date;
mod models;
mod symbol;

pub use date::{DateRange, TradingDate};
pub use models::{PricePoint, TickerOption};
pub use symbol::Symbol;
