use serde::{Deserialize, Serialize};

use crate::domain::{Symbol, TradingDate};
use crate::error::ValidationError;

/// One selectable catalog entry, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerOption {
    pub symbol: Symbol,
    pub display_name: String,
}

impl TickerOption {
    pub fn new(symbol: Symbol, display_name: impl Into<String>) -> Self {
        Self {
            symbol,
            display_name: display_name.into(),
        }
    }

    /// Dropdown label, e.g. `Tesla, Inc. (TSLA)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.symbol)
    }
}

/// Daily closing price for one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradingDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: TradingDate, close: f64) -> Result<Self, ValidationError> {
        if !close.is_finite() || close < 0.0 {
            return Err(ValidationError::InvalidPrice { field: "close" });
        }
        Ok(Self { date, close })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_combines_name_and_symbol() {
        let option = TickerOption::new(
            Symbol::parse("TSLA").expect("valid"),
            "Tesla, Inc.",
        );
        assert_eq!(option.label(), "Tesla, Inc. (TSLA)");
    }

    #[test]
    fn rejects_negative_close() {
        let date = TradingDate::parse("2020-01-02").expect("valid");
        let err = PricePoint::new(date, -1.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPrice { .. }));
    }

    #[test]
    fn rejects_non_finite_close() {
        let date = TradingDate::parse("2020-01-02").expect("valid");
        let err = PricePoint::new(date, f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPrice { .. }));
    }
}
