use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{WeatherError, WeatherResult},
    model::WeatherResponse,
    zip::ZipCode,
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Description reported when the upstream weather list is empty.
const DEFAULT_DESCRIPTION: &str = "clear";

/// Live provider backed by the OpenWeather current-weather endpoint.
///
/// One best-effort GET per request: no retry, no caching, transport-default
/// timeout.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different endpoint. Tests use this to stub
    /// the upstream.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// Map the provider's response fields onto the normalized shape.
fn normalize(zip: &ZipCode, parsed: OwCurrentResponse) -> WeatherResponse {
    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    WeatherResponse {
        zip_code: zip.as_str().to_string(),
        location: parsed.name,
        temperature: parsed.main.temp,
        description,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, zip: &ZipCode) -> WeatherResult<WeatherResponse> {
        // OpenWeather accepts the zip directly; US country code assumed.
        let query_zip = format!("{},US", zip.zip5());
        debug!(zip = %zip, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("zip", query_zip.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::BodyRead(e.to_string()))?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Decode(e.to_string()))?;

        Ok(normalize(zip, parsed))
    }
}
