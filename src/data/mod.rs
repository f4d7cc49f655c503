pub mod forecast;
pub mod geocode;
pub mod geoip;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    units::UnitPreferences,
    weather::{Location, WeatherData},
};

/// Failures of the three upstream endpoints. The display text is the fixed,
/// user-facing message; the transport detail stays in the source chain.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error getting location")]
    Location(#[source] reqwest::Error),
    #[error("Error getting location")]
    MalformedLocation(String),
    #[error("Error getting the cities' information")]
    CitySearch(#[source] reqwest::Error),
    #[error("Failed to fetch weather data")]
    Forecast(#[source] reqwest::Error),
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn get_user_location(&self) -> Result<Location>;
}

#[async_trait]
pub trait CitySearch: Send + Sync {
    async fn search_cities(&self, query: &str) -> Result<Vec<Location>>;
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn get_weather(&self, location: &Location, units: UnitPreferences)
    -> Result<WeatherData>;
}

pub(crate) fn http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_default()
}
