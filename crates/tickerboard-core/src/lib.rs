//! Core contracts for tickerboard.
//!
//! This crate contains:
//! - Canonical domain types and validation (symbols, dates, price points)
//! - The symbol catalog loaded once at startup
//! - Query selection validation
//! - The price provider trait, its Yahoo adapter, and the HTTP transport seam
//! - Chart assembly (series + title + theme)
//! - The injectable credential-verification contract

pub mod auth;
pub mod catalog;
pub mod chart;
pub mod domain;
pub mod error;
pub mod http;
pub mod provider;
pub mod query;

pub use auth::{CredentialVerifier, StaticCredentials};
pub use catalog::{CatalogError, SymbolCatalog};
pub use chart::{ChartAssembler, ChartSeries, ChartSpec, ChartTheme, SeriesFailure};
pub use domain::{DateRange, PricePoint, Symbol, TickerOption, TradingDate};
pub use error::ValidationError;
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient};
pub use provider::{yahoo::YahooProvider, FetchError, FetchErrorKind, PriceProvider};
pub use query::{QuerySelection, ValidatedQuery};
