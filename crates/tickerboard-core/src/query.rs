use crate::catalog::SymbolCatalog;
use crate::domain::{DateRange, Symbol, TradingDate};
use crate::error::ValidationError;

/// The submitted form state: which tickers over which window.
///
/// Symbols keep the order the user selected them in; duplicates are
/// dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySelection {
    symbols: Vec<Symbol>,
    range: DateRange,
}

impl QuerySelection {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>, range: DateRange) -> Self {
        let mut deduped: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            if !deduped.contains(&symbol) {
                deduped.push(symbol);
            }
        }
        Self {
            symbols: deduped,
            range,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Check the selection against the loaded catalog and the calendar.
    ///
    /// Pure function of its inputs; `today` is an argument so the
    /// end-clamping rule stays deterministic under test. Runs before any
    /// network call is made.
    pub fn validate(
        &self,
        catalog: &SymbolCatalog,
        today: TradingDate,
    ) -> Result<ValidatedQuery, ValidationError> {
        if self.symbols.is_empty() {
            return Err(ValidationError::EmptySelection);
        }

        for symbol in &self.symbols {
            if !catalog.contains(symbol) {
                return Err(ValidationError::UnknownSymbol {
                    symbol: symbol.as_str().to_owned(),
                });
            }
        }

        if self.range.start < TradingDate::EARLIEST_SUPPORTED {
            return Err(ValidationError::StartBeforeWindow {
                start: self.range.start,
                earliest: TradingDate::EARLIEST_SUPPORTED,
            });
        }

        // Re-run the range constructor after clamping: a start date in the
        // future would otherwise slip through as an inverted range.
        let range = DateRange::new(self.range.start, self.range.end.min(today))?;

        Ok(ValidatedQuery {
            symbols: self.symbols.clone(),
            range,
        })
    }
}

/// A selection that passed validation, with the end date clamped to today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    symbols: Vec<Symbol>,
    range: DateRange,
}

impl ValidatedQuery {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn range(&self) -> DateRange {
        self.range
    }
}
