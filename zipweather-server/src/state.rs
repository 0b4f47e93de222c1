use zipweather_core::WeatherService;

/// Shared state for HTTP handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherService,
}
