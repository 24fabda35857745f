//! Behavior-driven tests for series fetch and chart assembly.
//!
//! These verify HOW a validated selection turns into a chart spec: series
//! order, point order, titles, and the best-effort batch policy.

use std::sync::Arc;

use tickerboard_core::{ChartAssembler, FetchError, QuerySelection, Symbol};
use tickerboard_tests::{catalog, day, points, range, symbol, RecordingProvider};

const TSLA_CLOSES: &[(&str, f64)] = &[
    ("2020-01-02", 86.05),
    ("2020-01-03", 88.60),
    ("2020-01-06", 90.31),
];

const AAPL_CLOSES: &[(&str, f64)] = &[("2020-01-02", 75.09), ("2020-01-03", 74.36)];

fn assembler(provider: RecordingProvider) -> (Arc<RecordingProvider>, ChartAssembler) {
    let provider = Arc::new(provider);
    (provider.clone(), ChartAssembler::new(provider))
}

async fn build(
    assembler: &ChartAssembler,
    symbols: Vec<Symbol>,
    start: &str,
    end: &str,
) -> Result<tickerboard_core::ChartSpec, FetchError> {
    let selection = QuerySelection::new(symbols, range(start, end));
    let query = selection
        .validate(&catalog(), day("2024-06-01"))
        .expect("selection must validate");
    assembler.build_chart(&query).await
}

#[tokio::test]
async fn single_symbol_selection_builds_one_named_series() {
    // Given: TSLA over January 2020
    let (_, assembler) = assembler(RecordingProvider::new().with_series("TSLA", TSLA_CLOSES));

    // When: The chart is built
    let spec = build(&assembler, vec![symbol("TSLA")], "2020-01-01", "2020-01-31")
        .await
        .expect("must build");

    // Then: One series named TSLA, points ascending by date, title "TSLA"
    assert_eq!(spec.title, "TSLA");
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].symbol.as_str(), "TSLA");
    assert_eq!(spec.series[0].points, points(TSLA_CLOSES));
    assert!(spec.series[0]
        .points
        .windows(2)
        .all(|w| w[0].date < w[1].date));
    assert!(spec.failures.is_empty());
}

#[tokio::test]
async fn series_order_matches_selection_order() {
    // Given: TSLA then AAPL, in that selection order
    let (provider, assembler) = assembler(
        RecordingProvider::new()
            .with_series("TSLA", TSLA_CLOSES)
            .with_series("AAPL", AAPL_CLOSES),
    );

    // When: The chart is built
    let spec = build(
        &assembler,
        vec![symbol("TSLA"), symbol("AAPL")],
        "2020-01-01",
        "2020-01-02",
    )
    .await
    .expect("must build");

    // Then: Series and fetches both follow the selection order
    let order: Vec<&str> = spec.series.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(order, ["TSLA", "AAPL"]);
    assert_eq!(provider.calls(), ["TSLA", "AAPL"]);
    assert_eq!(spec.title, "TSLA, AAPL");
}

#[tokio::test]
async fn rebuilding_the_same_selection_is_idempotent() {
    // Given: A provider returning stable historical data
    let (provider, assembler) = assembler(RecordingProvider::new().with_series("TSLA", TSLA_CLOSES));

    // When: The same selection is built twice
    let first = build(&assembler, vec![symbol("TSLA")], "2020-01-01", "2020-01-31")
        .await
        .expect("must build");
    let second = build(&assembler, vec![symbol("TSLA")], "2020-01-01", "2020-01-31")
        .await
        .expect("must build");

    // Then: Identical specs, and no caching (the provider was hit twice)
    assert_eq!(first, second);
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn failed_symbol_is_skipped_but_recorded() {
    // Given: AAPL fails while TSLA succeeds
    let (_, assembler) = assembler(
        RecordingProvider::new()
            .with_series("TSLA", TSLA_CLOSES)
            .with_failure("AAPL", FetchError::provider(503, "upstream unavailable")),
    );

    // When: Both are requested
    let spec = build(
        &assembler,
        vec![symbol("TSLA"), symbol("AAPL")],
        "2020-01-01",
        "2020-01-31",
    )
    .await
    .expect("best-effort batch must survive one failure");

    // Then: The surviving series renders, the failure is visible, and the
    // title still names every requested symbol
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].symbol.as_str(), "TSLA");
    assert_eq!(spec.failures.len(), 1);
    assert_eq!(spec.failures[0].symbol.as_str(), "AAPL");
    assert!(spec.failures[0].reason.contains("503"));
    assert_eq!(spec.title, "TSLA, AAPL");
}

#[tokio::test]
async fn batch_fails_only_when_every_symbol_fails() {
    // Given: Every requested symbol fails
    let (_, assembler) = assembler(
        RecordingProvider::new()
            .with_failure("TSLA", FetchError::network("connection refused", true))
            .with_failure("AAPL", FetchError::provider(503, "upstream unavailable")),
    );

    // When/Then: The batch fails with the first symbol's error
    let err = build(
        &assembler,
        vec![symbol("TSLA"), symbol("AAPL")],
        "2020-01-01",
        "2020-01-31",
    )
    .await
    .expect_err("must fail");
    assert!(err.message().contains("connection refused"));
}

#[tokio::test]
async fn empty_provider_window_is_a_series_not_a_failure() {
    // Given: A symbol with no data in the window (e.g. delisted)
    let (_, assembler) = assembler(RecordingProvider::new());

    // When: The chart is built
    let spec = build(&assembler, vec![symbol("MSFT")], "2020-01-01", "2020-01-02")
        .await
        .expect("no data is a valid answer");

    // Then: An empty series is distinct from a recorded failure
    assert_eq!(spec.series.len(), 1);
    assert!(spec.series[0].points.is_empty());
    assert!(spec.failures.is_empty());
}
