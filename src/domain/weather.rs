mod conditions;
mod projections;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use conditions::{
    WeatherCategory, WeatherIcon, weather_code_to_category, weather_icon, weather_label,
};
pub use projections::{hour_label, round_temp, weekday_name};

/// A resolved place: from IP geolocation, a city search result or fixed coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            latitude: lat,
            longitude: lon,
        }
    }

    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self::new(format!("{lat:.4}, {lon:.4}"), String::new(), lat, lon)
    }

    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub time: String,
    pub temperature: f64,
    pub temperature_unit: String,
    pub apparent_temperature: f64,
    pub apparent_temperature_unit: String,
    pub relative_humidity: f64,
    pub relative_humidity_unit: String,
    pub weather_code: u8,
    pub wind_speed: f64,
    pub wind_speed_unit: String,
    pub precipitation: f64,
    pub precipitation_unit: String,
}

/// Parallel daily series; index `i` of every vector describes `time[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyWeather {
    pub time: Vec<String>,
    pub max_temp: Vec<Option<f64>>,
    pub max_temp_unit: String,
    pub min_temp: Vec<Option<f64>>,
    pub min_temp_unit: String,
    pub weather_code: Vec<Option<u8>>,
}

/// Parallel hourly series; index `i` of every vector describes `time[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HourlyWeather {
    pub time: Vec<String>,
    pub temperature: Vec<Option<f64>>,
    pub temperature_unit: String,
    pub weather_code: Vec<Option<u8>>,
}

/// One forecast payload. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherData {
    pub current: CurrentWeather,
    pub daily: Option<DailyWeather>,
    pub hourly: Option<HourlyWeather>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyCard {
    pub hour: String,
    pub temperature: i64,
    pub weather_code: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCard {
    pub date: String,
    pub max_temp: i64,
    pub min_temp: i64,
    pub weather_code: u8,
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
