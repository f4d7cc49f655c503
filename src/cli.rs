#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::domain::units::{PrecipitationUnit, TemperatureUnit, UnitPreferences, WindSpeedUnit};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum UnitSystemArg {
    #[default]
    Metric,
    Imperial,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weathervane",
    version,
    about = "Search-driven terminal weather viewer"
)]
pub struct Cli {
    /// City to search for at startup; the first match is shown
    pub city: Option<String>,

    /// Unit system applied to every selector
    #[arg(long, value_enum, default_value_t = UnitSystemArg::Metric)]
    pub units: UnitSystemArg,

    /// Temperature unit override
    #[arg(long, value_enum)]
    pub temperature_unit: Option<TemperatureUnit>,

    /// Wind speed unit override
    #[arg(long, value_enum)]
    pub wind_speed_unit: Option<WindSpeedUnit>,

    /// Precipitation unit override
    #[arg(long, value_enum)]
    pub precipitation_unit: Option<PrecipitationUnit>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Number of geocoding results offered per search (1..100)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub search_count: u8,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Location proxy endpoint
    #[arg(long, default_value = crate::data::geoip::LOCATION_PROXY_URL)]
    pub location_url: String,

    /// IP-geolocation API key; bypasses the location proxy when set
    #[arg(long, env = "GEOLOCALIZATION_API_KEY", hide_env_values = true)]
    pub geolocation_api_key: Option<String>,

    /// Redraw rate (5..60)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(5..=60))]
    pub fps: u8,

    /// Print a weather report to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }

    /// Unit selection at startup: the system preset, then per-selector overrides.
    #[must_use]
    pub fn initial_units(&self) -> UnitPreferences {
        let mut prefs = match self.units {
            UnitSystemArg::Metric => UnitPreferences::metric(),
            UnitSystemArg::Imperial => UnitPreferences::imperial(),
        };
        if let Some(unit) = self.temperature_unit {
            prefs.temperature = unit;
        }
        if let Some(unit) = self.wind_speed_unit {
            prefs.wind_speed = unit;
        }
        if let Some(unit) = self.precipitation_unit {
            prefs.precipitation = unit;
        }
        prefs
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }

    /// Trimmed startup city, if one was given.
    #[must_use]
    pub fn city_query(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}
