use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{PricePoint, Symbol};
use crate::provider::{FetchError, PriceProvider};
use crate::query::ValidatedQuery;

/// Fixed styling applied to every chart, mirroring the dashboard's warm
/// palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub plot_background: String,
    pub paper_background: String,
    pub font_color: String,
    pub axis_tick_color: String,
    pub accent: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            plot_background: String::from("#5e433e"),
            paper_background: String::from("#5e433e"),
            font_color: String::from("#ffffff"),
            axis_tick_color: String::from("#ffffff"),
            accent: String::from("#ff7f50"),
        }
    }
}

/// One named line: a symbol and its date-ascending close prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
}

/// A symbol whose fetch failed; carried on the spec so a failed fetch is
/// never rendered as a silently empty chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesFailure {
    pub symbol: Symbol,
    pub code: String,
    pub reason: String,
}

/// The payload handed to the rendering surface. Built fresh on every
/// submit; never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub theme: ChartTheme,
    pub series: Vec<ChartSeries>,
    pub failures: Vec<SeriesFailure>,
}

/// Fetches one series per selected symbol and assembles the chart spec.
pub struct ChartAssembler {
    provider: Arc<dyn PriceProvider>,
    theme: ChartTheme,
}

impl ChartAssembler {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self {
            provider,
            theme: ChartTheme::default(),
        }
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Fetch closes for each symbol in selection order and build the spec.
    ///
    /// Best-effort batch policy: a failing symbol is recorded in
    /// `failures` and does not abort the others. Only when every symbol
    /// fails does the whole batch fail, with the first error. The title
    /// names all requested symbols, failed ones included. No caching;
    /// every call re-fetches.
    pub async fn build_chart(&self, query: &ValidatedQuery) -> Result<ChartSpec, FetchError> {
        let range = query.range();
        let mut series = Vec::with_capacity(query.symbols().len());
        let mut failures = Vec::new();
        let mut first_error: Option<FetchError> = None;

        for symbol in query.symbols() {
            match self.provider.daily_closes(symbol, &range).await {
                Ok(points) => series.push(ChartSeries {
                    symbol: symbol.clone(),
                    points,
                }),
                Err(error) => {
                    tracing::warn!(%symbol, %error, "series fetch failed");
                    failures.push(SeriesFailure {
                        symbol: symbol.clone(),
                        code: error.code().to_owned(),
                        reason: error.message().to_owned(),
                    });
                    first_error.get_or_insert(error);
                }
            }
        }

        if series.is_empty() {
            if let Some(error) = first_error {
                return Err(error);
            }
        }

        Ok(ChartSpec {
            title: chart_title(query.symbols()),
            theme: self.theme.clone(),
            series,
            failures,
        })
    }
}

/// Comma-joined list of the requested symbols.
fn chart_title(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
