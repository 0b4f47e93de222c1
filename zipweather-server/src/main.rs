//! Binary crate for the zip-code weather gateway server.

use anyhow::Context;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zipweather_core::{Config, WeatherService};
use zipweather_server::{router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("zipweather_server=info,zipweather_core=info,tower_http=info")
        }))
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    if config.openweather_api_key().is_some() {
        info!("OpenWeather credential configured, serving live weather data");
    } else {
        info!("no OpenWeather credential configured, serving demo data");
    }

    let state = AppState {
        weather: WeatherService::from_config(&config),
    };
    let app = router(state);

    // A bind failure here is fatal: the process stops before accepting
    // connections.
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("listening on {addr}");
    info!("endpoints: GET /weather?zip_code=10001, GET /health, GET /api/v1/weather, GET /api/v1/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("received terminate signal, shutting down");
        },
    }
}
