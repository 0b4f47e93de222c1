use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;
use zipweather_core::{WeatherResponse, provider::demo};

use crate::error::ApiResult;
use crate::state::AppState;

/// Query parameters for the weather endpoint.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub zip_code: Option<String>,
}

/// Handler for `GET /weather` and `GET /api/v1/weather`.
#[axum::debug_handler]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> ApiResult<Json<WeatherResponse>> {
    debug!(zip_code = ?params.zip_code, "received weather request");

    // A missing parameter and an empty one report the same "required" error.
    let raw = params.zip_code.unwrap_or_default();
    let response = state.weather.resolve(&raw).await?;

    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Handler for `GET /health` and `GET /api/v1/health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "weather-api",
    })
}

/// Handler for `GET /`: API documentation and the demo zip code list.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "Weather API Server",
        "endpoints": {
            "GET /weather?zip_code=XXXXX": "Get weather by zip code (5 digits)",
            "GET /health": "Health check endpoint",
        },
        "example": "GET /weather?zip_code=10001",
        "supported_zip_codes": demo::demo_zip_codes(),
    }))
}
