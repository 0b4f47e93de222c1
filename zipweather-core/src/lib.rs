//! Core library for the zip-code weather gateway.
//!
//! This crate defines:
//! - Configuration handling (environment variables plus an optional TOML file)
//! - Zip code validation
//! - Abstraction over weather providers (live OpenWeather or built-in demo data)
//! - Shared domain models (responses, errors)
//!
//! It is used by `zipweather-server`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod zip;

pub use config::Config;
pub use error::{WeatherError, WeatherResult};
pub use model::WeatherResponse;
pub use provider::{WeatherProvider, provider_from_config};
pub use service::WeatherService;
pub use zip::ZipCode;
