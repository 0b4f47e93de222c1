use thiserror::Error;

/// The main result type for zipweather-core operations.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors produced while resolving a weather request.
///
/// The `Display` text of each variant is the exact message surfaced to HTTP
/// clients in the `{"error": ...}` body, so the wording here is part of the
/// API contract.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("zip_code parameter is required")]
    MissingZip,

    #[error("zip_code must be in format XXXXX or XXXXX-XXXX")]
    MalformedZip,

    /// The request to the upstream provider could not be sent.
    #[error("failed to fetch weather data: {0}")]
    Transport(String),

    /// The upstream provider answered with a non-success status.
    #[error("weather API returned status: {0}")]
    UpstreamStatus(u16),

    #[error("failed to read response body: {0}")]
    BodyRead(String),

    #[error("failed to parse weather data: {0}")]
    Decode(String),
}
