use serde::{Deserialize, Serialize};

/// Normalized weather data returned to clients.
///
/// `zip_code` echoes the exact request input, including a `-XXXX` extension
/// when one was supplied. Temperature is Fahrenheit and wind speed mph, the
/// units requested from the upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub zip_code: String,
    pub location: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let response = WeatherResponse {
            zip_code: "10001".to_string(),
            location: "New York".to_string(),
            temperature: 72.5,
            description: "partly cloudy (demo data)".to_string(),
            humidity: 65,
            wind_speed: 8.2,
        };

        let value = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(value["zip_code"], "10001");
        assert_eq!(value["location"], "New York");
        assert_eq!(value["temperature"], 72.5);
        assert_eq!(value["humidity"], 65);
        assert_eq!(value["wind_speed"], 8.2);
    }
}
