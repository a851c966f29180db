//! API error type
//!
//! Only the HTTP boundary fails; the cart store's operations are total.
//! Unknown products are a 404, builder-validation failures a 422.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the REST handlers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("unknown product id {0}")]
    UnknownProduct(u32),

    #[error("a gift box needs at least one product")]
    EmptySelection,

    #[error("a gift box needs a name")]
    UnnamedGiftBox,

    #[error("product id {0} is selected more than once")]
    DuplicateSelection(u32),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownProduct(_) => StatusCode::NOT_FOUND,
            ApiError::EmptySelection
            | ApiError::UnnamedGiftBox
            | ApiError::DuplicateSelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
