use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::units::UnitsStore;
use crate::{
    data::ForecastProvider,
    domain::weather::{DailyCard, HourlyCard, Location, WeatherData},
};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

#[derive(Debug, Clone, Default)]
pub struct WeatherSnapshot {
    pub current_location: Option<Location>,
    pub weather_data: Option<WeatherData>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owns the forecast fetch lifecycle and the projections derived from it.
///
/// Overlapping fetches are not coordinated: whichever response lands last
/// overwrites `weather_data`, and the first one to finish clears `loading`.
#[derive(Clone)]
pub struct WeatherStore {
    inner: Arc<Inner>,
}

struct Inner {
    provider: Arc<dyn ForecastProvider>,
    units: UnitsStore,
    state: Mutex<WeatherSnapshot>,
}

impl std::fmt::Debug for WeatherStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherStore")
            .field("units", &self.inner.units)
            .field("state", &*self.inner.state.lock())
            .finish_non_exhaustive()
    }
}

impl WeatherStore {
    pub fn new(provider: Arc<dyn ForecastProvider>, units: UnitsStore) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                units,
                state: Mutex::new(WeatherSnapshot::default()),
            }),
        }
    }

    #[must_use]
    pub fn units(&self) -> &UnitsStore {
        &self.inner.units
    }

    #[must_use]
    pub fn snapshot(&self) -> WeatherSnapshot {
        self.inner.state.lock().clone()
    }

    #[must_use]
    pub fn current_location(&self) -> Option<Location> {
        self.inner.state.lock().current_location.clone()
    }

    #[must_use]
    pub fn weather_data(&self) -> Option<WeatherData> {
        self.inner.state.lock().weather_data.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.inner.state.lock().error.clone()
    }

    pub fn set_weather_data(&self, data: Option<WeatherData>) {
        self.inner.state.lock().weather_data = data;
    }

    /// Fetches the forecast for `location` with the current unit selection.
    /// Failures land in [`WeatherStore::error`]; nothing is returned to the caller.
    pub async fn fetch_weather(&self, location: Location) {
        let _loading = self.begin_fetch(&location);
        let units = self.inner.units.preferences();
        tracing::debug!(city = %location.city, ?units, "fetching weather");

        let result = self.inner.provider.get_weather(&location, units).await;

        let mut state = self.inner.state.lock();
        match result {
            Ok(data) => state.weather_data = Some(data),
            Err(err) => {
                tracing::error!(error = ?err, city = %location.city, "weather fetch failed");
                state.error = Some(error_message(&err));
            }
        }
    }

    #[must_use]
    pub fn hourly_data(&self) -> Vec<HourlyCard> {
        self.inner
            .state
            .lock()
            .weather_data
            .as_ref()
            .map(WeatherData::hourly_cards)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn daily_data(&self) -> Vec<DailyCard> {
        self.inner
            .state
            .lock()
            .weather_data
            .as_ref()
            .map(WeatherData::daily_cards)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn formatted_days(&self) -> Vec<String> {
        self.inner
            .state
            .lock()
            .weather_data
            .as_ref()
            .map(WeatherData::formatted_days)
            .unwrap_or_default()
    }

    /// Hourly cards on the forecast date named `day`; empty for unknown days.
    #[must_use]
    pub fn hourly_for_day(&self, day: &str) -> Vec<HourlyCard> {
        self.inner
            .state
            .lock()
            .weather_data
            .as_ref()
            .map(|data| data.hourly_cards_for_day(day))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn current_day(&self) -> Option<String> {
        self.inner
            .state
            .lock()
            .weather_data
            .as_ref()
            .map(WeatherData::current_day)
    }

    /// Re-fetches for the current location whenever a unit selector changes.
    /// Changes made before any location is known are ignored. The task runs
    /// for the rest of the session; abort the handle to stop it.
    pub fn spawn_unit_watcher(&self) -> JoinHandle<()> {
        let mut changes = self.inner.units.subscribe();
        let store = self.clone();
        tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let Some(location) = store.current_location() else {
                    tracing::debug!("unit change ignored, no location yet");
                    continue;
                };
                let store = store.clone();
                tokio::spawn(async move { store.fetch_weather(location).await });
            }
        })
    }

    fn begin_fetch(&self, location: &Location) -> LoadingGuard<'_> {
        let mut state = self.inner.state.lock();
        state.loading = true;
        state.error = None;
        state.current_location = Some(location.clone());
        LoadingGuard { store: self }
    }
}

/// Clears `loading` when a fetch finishes, including when its future is dropped.
struct LoadingGuard<'a> {
    store: &'a WeatherStore,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.inner.state.lock().loading = false;
    }
}

fn error_message(err: &anyhow::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FETCH_FAILED_MESSAGE.to_string()
    } else {
        message
    }
}
