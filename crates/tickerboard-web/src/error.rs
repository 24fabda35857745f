use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tickerboard_core::{FetchError, ValidationError};

/// Errors surfaced to API clients as structured JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected submission; form state on the client stays unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Whole-batch fetch failure toward the price provider.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "query.invalid",
            Self::Fetch(error) => error.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
