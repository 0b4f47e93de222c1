//! HTTP surface for the zip-code weather gateway.
//!
//! Exposes weather lookup, health and documentation endpoints over JSON, with
//! permissive CORS for browser clients. All routes are duplicated under
//! `/api/v1`.

use std::any::Any;

use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod state;

use state::AppState;

/// Build the application router with all middleware layers applied.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/weather", get(handlers::get_weather))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .merge(api.clone())
        .nest("/api/v1", api)
        .layer(middleware::from_fn(preflight_shortcut))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(cors_layer())
        .with_state(state)
}

/// Answer `OPTIONS` with an empty 200 before any handler logic runs.
async fn preflight_shortcut(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Convert a handler panic into a 500 for that request only; the process
/// keeps serving other requests.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "internal server error"})),
    )
        .into_response()
}
