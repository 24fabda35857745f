use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tickerboard_core::{
    ChartSpec, DateRange, QuerySelection, Symbol, TradingDate,
};

use crate::auth;
use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/symbols", get(list_symbols))
        .route("/api/chart", post(build_chart))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// One dropdown option, `label` in `Name (SYMBOL)` form.
#[derive(Debug, Serialize)]
struct SymbolOption {
    value: String,
    label: String,
}

async fn list_symbols(State(state): State<AppState>) -> Json<Vec<SymbolOption>> {
    let options = state
        .catalog
        .options()
        .iter()
        .map(|option| SymbolOption {
            value: option.symbol.as_str().to_owned(),
            label: option.label(),
        })
        .collect();
    Json(options)
}

/// Submitted form state: tickers plus a date window.
#[derive(Debug, Deserialize)]
struct ChartRequest {
    symbols: Vec<String>,
    start: TradingDate,
    end: TradingDate,
}

async fn build_chart(
    State(state): State<AppState>,
    Json(request): Json<ChartRequest>,
) -> Result<Json<ChartSpec>, ApiError> {
    let symbols = request
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let range = DateRange::new(request.start, request.end)?;

    let selection = QuerySelection::new(symbols, range);
    let query = selection.validate(&state.catalog, TradingDate::today_utc())?;

    let spec = state.assembler.build_chart(&query).await?;
    Ok(Json(spec))
}
