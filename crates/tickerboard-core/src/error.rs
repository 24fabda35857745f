use thiserror::Error;

use crate::domain::TradingDate;

/// User-input and contract errors exposed by `tickerboard-core`.
///
/// These reject a submission; they never abort the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("selection must contain at least one symbol")]
    EmptySelection,
    #[error("symbol '{symbol}' is not in the catalog")]
    UnknownSymbol { symbol: String },
    #[error("range start {start} is after end {end}")]
    InvalidRange {
        start: TradingDate,
        end: TradingDate,
    },
    #[error("range start {start} is before the earliest supported day {earliest}")]
    StartBeforeWindow {
        start: TradingDate,
        earliest: TradingDate,
    },

    #[error("close price for '{field}' must be finite and non-negative")]
    InvalidPrice { field: &'static str },
}
