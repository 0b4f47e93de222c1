use std::sync::Arc;

use crate::{
    Config,
    error::WeatherResult,
    model::WeatherResponse,
    provider::{WeatherProvider, provider_from_config},
    zip::ZipCode,
};

/// Resolves raw zip-code input to weather data through the configured
/// provider.
///
/// Cheap to clone; the provider behind the `Arc` is read-only and shared
/// across requests.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(provider_from_config(config))
    }

    /// Validate `raw_zip` and fetch weather for it.
    pub async fn resolve(&self, raw_zip: &str) -> WeatherResult<WeatherResponse> {
        let zip = ZipCode::parse(raw_zip)?;
        self.provider.fetch(&zip).await
    }
}
