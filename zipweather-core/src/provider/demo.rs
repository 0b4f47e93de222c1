use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{error::WeatherResult, model::WeatherResponse, zip::ZipCode};

use super::WeatherProvider;

/// Location reported for zip codes absent from the demo table.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

const DEMO_TEMPERATURE: f64 = 72.5;
const DEMO_DESCRIPTION: &str = "partly cloudy (demo data)";
const DEMO_HUMIDITY: u8 = 65;
const DEMO_WIND_SPEED: f64 = 8.2;

/// The demo zip→city table. Slice order is the order advertised by the
/// documentation endpoint.
const DEMO_LOCATIONS: &[(&str, &str)] = &[
    ("10001", "New York"),
    ("90210", "Beverly Hills"),
    ("60601", "Chicago"),
    ("94102", "San Francisco"),
    ("77001", "Houston"),
    ("33101", "Miami"),
    ("98101", "Seattle"),
    ("02101", "Boston"),
    ("30301", "Atlanta"),
    ("75201", "Dallas"),
    ("20001", "Washington"),
    ("89101", "Las Vegas"),
    ("80201", "Denver"),
    ("85001", "Phoenix"),
    ("19101", "Philadelphia"),
];

static LOCATION_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DEMO_LOCATIONS.iter().copied().collect());

/// City name for a five-digit zip code, if it is in the demo table.
pub fn demo_location(zip5: &str) -> Option<&'static str> {
    LOCATION_TABLE.get(zip5).copied()
}

/// The demo zip codes, in advertised order.
pub fn demo_zip_codes() -> Vec<&'static str> {
    DEMO_LOCATIONS.iter().map(|(zip, _)| *zip).collect()
}

/// Provider active when no OpenWeather credential is configured.
///
/// Resolves the city from the five-digit portion of the zip code and fills in
/// fixed placeholder weather values. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

#[async_trait]
impl WeatherProvider for DemoProvider {
    async fn fetch(&self, zip: &ZipCode) -> WeatherResult<WeatherResponse> {
        let location = demo_location(zip.zip5()).unwrap_or(UNKNOWN_LOCATION);

        Ok(WeatherResponse {
            zip_code: zip.as_str().to_string(),
            location: location.to_string(),
            temperature: DEMO_TEMPERATURE,
            description: DEMO_DESCRIPTION.to_string(),
            humidity: DEMO_HUMIDITY,
            wind_speed: DEMO_WIND_SPEED,
        })
    }
}
