//! Error types and handling for the CityInfo application

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use thiserror::Error;

use crate::pages;

/// Main error type for request handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// A requested entity does not exist in the data store
    #[error("{0} not found")]
    NotFound(String),

    /// The request itself was malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An upstream managed service failed; surfaced as a generic server error
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not-found error for an unknown city name.
    pub fn unknown_city(name: &str) -> Self {
        Self::NotFound(format!("city '{name}'"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound(what) => {
                tracing::debug!("Not found: {what}");
                (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
            }
            AppError::BadRequest(message) => {
                tracing::debug!("Bad request: {message}");
                let body = serde_json::json!({ "error": message });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Upstream(err) => {
                tracing::error!("Upstream failure: {err:#}");
                let body = serde_json::json!({ "error": "internal server error" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_city_maps_to_404() {
        let response = AppError::unknown_city("Nowhere").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let response = AppError::from(anyhow::anyhow!("model service unreachable")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
