use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DateRange, PricePoint, Symbol, TradingDate};
use crate::http::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::provider::{FetchError, PriceProvider};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Daily-close provider backed by the Yahoo Finance chart API.
pub struct YahooProvider {
    transport: Arc<dyn HttpClient>,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_transport(transport: Arc<dyn HttpClient>) -> Self {
        Self {
            transport,
            base_url: BASE_URL.to_owned(),
        }
    }

    fn chart_url(&self, symbol: &Symbol, range: &DateRange) -> String {
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            symbol,
            range.start.unix_timestamp(),
            range.end.exclusive_end_timestamp(),
        )
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for YahooProvider {
    async fn daily_closes(
        &self,
        symbol: &Symbol,
        range: &DateRange,
    ) -> Result<Vec<PricePoint>, FetchError> {
        let request = HttpRequest::get(self.chart_url(symbol, range));
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(FetchError::provider(
                response.status,
                format!("chart request for '{symbol}' failed"),
            ));
        }

        let envelope: ChartEnvelope = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::decode(format!("chart payload for '{symbol}': {e}")))?;

        if let Some(error) = envelope.chart.error {
            return Err(FetchError::reported(error.code, error.description));
        }

        let Some(result) = envelope
            .chart
            .result
            .and_then(|results| results.into_iter().next())
        else {
            // Delisted symbols and holiday-only windows come back with a
            // null result; that is "no data", not a failure.
            tracing::warn!(%symbol, "provider returned no data for the requested window");
            return Ok(Vec::new());
        };

        let Some(quote) = result.indicators.quote.into_iter().next() else {
            tracing::warn!(%symbol, "provider result carried no quote block");
            return Ok(Vec::new());
        };

        if result.timestamp.len() != quote.close.len() {
            tracing::warn!(
                %symbol,
                timestamps = result.timestamp.len(),
                closes = quote.close.len(),
                "provider arrays disagree in length, keeping the overlapping pairs"
            );
        }

        let mut points = Vec::with_capacity(result.timestamp.len());
        for (ts, close) in result.timestamp.iter().zip(quote.close.iter()) {
            // Null closes pad out market holidays; skip them.
            let Some(close) = close else { continue };
            let date = TradingDate::from_unix_timestamp(*ts)
                .map_err(|e| FetchError::decode(format!("chart timestamp for '{symbol}': {e}")))?;
            let point = PricePoint::new(date, *close)
                .map_err(|e| FetchError::decode(format!("chart close for '{symbol}': {e}")))?;
            points.push(point);
        }

        points.sort_by_key(|point| point.date);
        Ok(points)
    }
}

// Wire shape of the chart API; only the fields consumed are modeled.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
