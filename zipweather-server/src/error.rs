use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;
use zipweather_core::WeatherError;

/// HTTP-facing wrapper around core errors.
///
/// Both validation and upstream failures are terminal for the request and
/// reported as 400 with the underlying message verbatim.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] WeatherError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "weather request failed");

        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": self.0.to_string()})),
        )
            .into_response()
    }
}

/// Result type alias for handler functions.
pub type ApiResult<T> = Result<T, ApiError>;
