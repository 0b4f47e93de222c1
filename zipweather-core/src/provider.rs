use crate::{
    Config, WeatherResponse, ZipCode,
    error::WeatherResult,
    provider::{demo::DemoProvider, openweather::OpenWeatherProvider},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod demo;
pub mod openweather;

/// Capability interface over weather data sources.
///
/// Implementations receive a validated [`ZipCode`] and return the normalized
/// response shape. Tests substitute fakes through this trait so the HTTP
/// layer can be exercised without network access.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, zip: &ZipCode) -> WeatherResult<WeatherResponse>;
}

/// Select the provider implied by the configuration.
///
/// A configured OpenWeather credential selects the live provider; otherwise
/// the gateway serves fixed demo data. The missing credential is a mode
/// switch, not an error.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    match config.openweather_api_key() {
        Some(api_key) => Arc::new(OpenWeatherProvider::new(api_key.to_owned())),
        None => Arc::new(DemoProvider),
    }
}
