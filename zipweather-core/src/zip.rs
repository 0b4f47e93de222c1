use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{WeatherError, WeatherResult};

/// Pattern for US zip codes: five digits, optionally extended with four more.
/// ASCII digits only; input is not trimmed.
static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip pattern must compile"));

/// A validated US zip code, preserving the exact input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate `raw` as a zip code.
    ///
    /// An empty string fails with [`WeatherError::MissingZip`]; any other
    /// non-matching string with [`WeatherError::MalformedZip`].
    pub fn parse(raw: &str) -> WeatherResult<Self> {
        if raw.is_empty() {
            return Err(WeatherError::MissingZip);
        }
        if !ZIP_PATTERN.is_match(raw) {
            return Err(WeatherError::MalformedZip);
        }
        Ok(Self(raw.to_string()))
    }

    /// The exact input string, extension included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The five-digit portion, used for lookups and upstream queries.
    pub fn zip5(&self) -> &str {
        &self.0[..5]
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
