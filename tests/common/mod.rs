#![allow(dead_code)]

use std::{collections::VecDeque, sync::Arc, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use weathervane::{
    app::{services::Services, units::UnitsStore},
    data::{CitySearch, ForecastProvider, LocationProvider},
    domain::{
        units::UnitPreferences,
        weather::{CurrentWeather, DailyWeather, HourlyWeather, Location, WeatherData},
    },
};

pub fn medellin() -> Location {
    Location::new("Medellin", "Colombia", 6.24861, -75.57425)
}

pub fn oslo() -> Location {
    Location::new("Oslo", "Norway", 59.9139, 10.7522)
}

/// A forecast whose current temperature identifies it in assertions.
pub fn weather_with_temp(temperature: f64) -> WeatherData {
    let current = CurrentWeather {
        time: "2024-01-01T10:00".to_string(),
        temperature,
        temperature_unit: "°C".to_string(),
        apparent_temperature: temperature - 1.0,
        apparent_temperature_unit: "°C".to_string(),
        relative_humidity: 65.0,
        relative_humidity_unit: "%".to_string(),
        weather_code: 2,
        wind_speed: 10.0,
        wind_speed_unit: "km/h".to_string(),
        precipitation: 0.0,
        precipitation_unit: "mm".to_string(),
    };
    let hourly = HourlyWeather {
        time: (0..24).map(|h| format!("2024-01-01T{h:02}:00")).collect(),
        temperature: (0..24).map(|h| Some(temperature + f64::from(h) * 0.25)).collect(),
        temperature_unit: "°C".to_string(),
        weather_code: vec![Some(61); 24],
    };
    let daily = DailyWeather {
        time: (1..=7).map(|d| format!("2024-01-{d:02}")).collect(),
        max_temp: (0..7).map(|d| Some(temperature + 3.0 + f64::from(d))).collect(),
        max_temp_unit: "°C".to_string(),
        min_temp: (0..7).map(|d| Some(temperature - 5.0 + f64::from(d))).collect(),
        min_temp_unit: "°C".to_string(),
        weather_code: vec![Some(0), Some(1), Some(2), Some(3), Some(61), Some(95), Some(71)],
    };
    WeatherData {
        current,
        daily: Some(daily),
        hourly: Some(hourly),
    }
}

/// Answers every request with the same outcome and records each call.
#[derive(Debug)]
pub struct RecordingForecast {
    outcome: Mutex<Result<WeatherData, String>>,
    calls: Mutex<Vec<(Location, UnitPreferences)>>,
}

impl RecordingForecast {
    pub fn ok(data: WeatherData) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Ok(data)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Err(message.to_string())),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_outcome(&self, outcome: Result<WeatherData, String>) {
        *self.outcome.lock() = outcome;
    }

    pub fn calls(&self) -> Vec<(Location, UnitPreferences)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ForecastProvider for RecordingForecast {
    async fn get_weather(
        &self,
        location: &Location,
        units: UnitPreferences,
    ) -> anyhow::Result<WeatherData> {
        self.calls.lock().push((location.clone(), units));
        self.outcome.lock().clone().map_err(anyhow::Error::msg)
    }
}

/// Each call waits on the next gate, so a test decides when and in which
/// order responses arrive.
#[derive(Debug, Default)]
pub struct GatedForecast {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<WeatherData, String>>>>,
    calls: Mutex<Vec<(Location, UnitPreferences)>>,
}

impl GatedForecast {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a gate for the next unanswered call.
    pub fn gate(&self) -> oneshot::Sender<Result<WeatherData, String>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<(Location, UnitPreferences)> {
        self.calls.lock().clone()
    }

    pub async fn wait_for_calls(&self, count: usize) {
        while self.calls.lock().len() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ForecastProvider for GatedForecast {
    async fn get_weather(
        &self,
        location: &Location,
        units: UnitPreferences,
    ) -> anyhow::Result<WeatherData> {
        let gate = {
            self.calls.lock().push((location.clone(), units));
            self.gates.lock().pop_front()
        };
        let Some(gate) = gate else {
            anyhow::bail!("no gate queued");
        };
        match gate.await {
            Ok(outcome) => outcome.map_err(anyhow::Error::msg),
            Err(_) => anyhow::bail!("gate dropped"),
        }
    }
}

#[derive(Debug)]
pub struct FakeCities {
    results: Option<Vec<Location>>,
    queries: Mutex<Vec<String>>,
}

impl FakeCities {
    pub fn returning(results: Vec<Location>) -> Arc<Self> {
        Arc::new(Self {
            results: Some(results),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            results: None,
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl CitySearch for FakeCities {
    async fn search_cities(&self, query: &str) -> anyhow::Result<Vec<Location>> {
        self.queries.lock().push(query.to_string());
        self.results
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Error getting the cities' information"))
    }
}

#[derive(Debug)]
pub struct FixedLocator(pub Option<Location>);

#[async_trait]
impl LocationProvider for FixedLocator {
    async fn get_user_location(&self) -> anyhow::Result<Location> {
        self.0
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Error getting location"))
    }
}

pub fn services_with(
    forecast: Arc<dyn ForecastProvider>,
    cities: Arc<dyn CitySearch>,
    locator: FixedLocator,
) -> Services {
    Services::new(UnitsStore::default(), forecast, cities, Arc::new(locator))
}

/// Polls `check` until it holds or `limit` elapses.
pub async fn eventually(limit: Duration, mut check: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}
