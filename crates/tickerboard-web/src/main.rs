mod auth;
mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use tickerboard_core::{CatalogError, ChartAssembler, SymbolCatalog, YahooProvider};

use crate::config::{ConfigError, ServerConfig};
use crate::state::AppState;

#[derive(Debug, Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // The catalog is startup-fatal: the process cannot serve without one.
    let catalog = Arc::new(SymbolCatalog::load(&config.catalog_path)?);
    tracing::info!(
        path = %config.catalog_path.display(),
        tickers = catalog.len(),
        "catalog loaded"
    );

    let state = AppState {
        catalog,
        assembler: Arc::new(ChartAssembler::new(Arc::new(YahooProvider::new()))),
        verifier: Arc::new(config.credentials),
    };

    let app = routes::router(state);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "tickerboard listening");
    axum::serve(listener, app).await?;

    Ok(())
}
