use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Port the server binds when neither `PORT` nor the config file set one.
pub const DEFAULT_PORT: u16 = 8080;

/// Credentials for the OpenWeather provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Optional configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// port = 8080
///
/// [openweather]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub openweather: Option<ProviderConfig>,
}

impl FileConfig {
    /// Load the config file from disk, or return an empty default if it
    /// doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: FileConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "zipweather", "zipweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Resolved runtime configuration, read once at startup.
///
/// The absence of an OpenWeather API key is a valid mode (demo data), not an
/// error. Environment variables take precedence over the config file; empty
/// values are treated as unset.
#[derive(Debug, Clone)]
pub struct Config {
    port: u16,
    openweather_api_key: Option<String>,
}

impl Config {
    pub fn new(port: u16, openweather_api_key: Option<String>) -> Self {
        Self {
            port,
            openweather_api_key,
        }
    }

    /// Load configuration from the optional config file and the `PORT` /
    /// `OPENWEATHER_API_KEY` environment variables.
    pub fn load() -> Result<Self> {
        let file = FileConfig::load()?;
        Self::resolve(
            file,
            env::var("PORT").ok(),
            env::var("OPENWEATHER_API_KEY").ok(),
        )
    }

    fn resolve(file: FileConfig, port: Option<String>, api_key: Option<String>) -> Result<Self> {
        let port = match port.filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let openweather_api_key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| file.openweather.map(|p| p.api_key))
            .filter(|k| !k.is_empty());

        Ok(Self {
            port,
            openweather_api_key,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the OpenWeather API key, if one is configured.
    pub fn openweather_api_key(&self) -> Option<&str> {
        self.openweather_api_key.as_deref()
    }
}
