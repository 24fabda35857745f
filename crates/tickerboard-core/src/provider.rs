use std::fmt::{Display, Formatter};

use async_trait::async_trait;

use crate::domain::{DateRange, PricePoint, Symbol};
use crate::http::HttpError;

pub mod yahoo;

/// Classification of a failed provider fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport failure talking to the provider.
    Network,
    /// The provider answered, but with an error status or payload.
    Provider,
    /// The provider payload did not match the expected shape.
    Decode,
}

/// Per-symbol or batch failure talking to the external price provider.
///
/// Nothing here is retried automatically; retry policy belongs to the
/// transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn network(message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            message: message.into(),
            retryable,
        }
    }

    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Provider,
            message: format!("provider returned {status}: {}", message.into()),
            retryable: status >= 500,
        }
    }

    /// Error body reported by the provider inside a successful response.
    pub fn reported(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Provider,
            message: format!("provider reported {}: {}", code.into(), description.into()),
            retryable: false,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Network => "fetch.network",
            FetchErrorKind::Provider => "fetch.provider",
            FetchErrorKind::Decode => "fetch.decode",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

impl From<HttpError> for FetchError {
    fn from(error: HttpError) -> Self {
        Self::network(error.message().to_owned(), error.retryable())
    }
}

/// External price data source contract.
///
/// An empty result is a valid answer (holiday-only window, symbol delisted
/// before the window) and is distinct from a failed fetch.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily closing prices over the inclusive `range`, ordered ascending
    /// by date.
    async fn daily_closes(
        &self,
        symbol: &Symbol,
        range: &DateRange,
    ) -> Result<Vec<PricePoint>, FetchError>;
}
