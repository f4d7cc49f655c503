use std::{future::Future, sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::weather::WeatherStore;
use crate::{data::CitySearch, domain::weather::Location};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const MIN_QUERY_CHARS: usize = 2;
pub const NO_RESULTS_MESSAGE: &str = "No search result found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Debouncing,
    Searching,
    Results,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub phase: SearchPhase,
    pub results: Vec<Location>,
    pub is_loading: bool,
    pub show_dropdown: bool,
    pub message: Option<String>,
    searched: bool,
    generation: u64,
}

impl SearchState {
    /// Submitting is pointless once a completed search came back empty.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.searched && !self.is_loading && self.results.is_empty()
    }
}

/// Debounced city search feeding a dropdown; choosing a result loads its weather.
#[derive(Clone)]
pub struct SearchFlow {
    inner: Arc<Inner>,
}

struct Inner {
    cities: Arc<dyn CitySearch>,
    weather: WeatherStore,
    debounce: Duration,
    state: Mutex<SearchState>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for SearchFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchFlow")
            .field("debounce", &self.inner.debounce)
            .field("state", &*self.inner.state.lock())
            .finish_non_exhaustive()
    }
}

impl SearchFlow {
    pub fn new(cities: Arc<dyn CitySearch>, weather: WeatherStore) -> Self {
        Self::with_debounce(cities, weather, SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(
        cities: Arc<dyn CitySearch>,
        weather: WeatherStore,
        debounce: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                cities,
                weather,
                debounce,
                state: Mutex::new(SearchState::default()),
                pending: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.inner.state.lock().clone()
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.inner.state.lock().query.clone()
    }

    #[must_use]
    pub fn results(&self) -> Vec<Location> {
        self.inner.state.lock().results.clone()
    }

    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.inner.state.lock().message.clone()
    }

    /// Records a new query value. Any pending search is cancelled; a query of
    /// at least [`MIN_QUERY_CHARS`] restarts the debounce timer, a shorter one
    /// clears the dropdown.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.cancel_pending();

        let generation = {
            let mut state = self.inner.state.lock();
            state.query.clone_from(&query);
            state.generation += 1;
            state.is_loading = false;
            if !is_searchable(&query) {
                state.phase = SearchPhase::Idle;
                state.results.clear();
                state.show_dropdown = false;
                state.searched = false;
                return;
            }
            state.phase = SearchPhase::Debouncing;
            state.generation
        };

        let flow = self.clone();
        let delay = self.inner.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            flow.run_search(query, generation).await;
        });
        *self.inner.pending.lock() = Some(handle);
    }

    /// Runs a search for `query` right away, skipping the debounce timer.
    pub async fn search_now(&self, query: &str) {
        self.cancel_pending();
        let generation = {
            let mut state = self.inner.state.lock();
            state.query = query.to_string();
            state.generation += 1;
            state.generation
        };
        self.run_search(query.to_string(), generation).await;
    }

    pub fn dismiss(&self) {
        self.inner.state.lock().show_dropdown = false;
    }

    /// Clears the query and dropdown immediately; the returned future loads
    /// weather for `location`.
    pub fn select(&self, location: Location) -> impl Future<Output = ()> + Send + use<> {
        self.cancel_pending();
        {
            let mut state = self.inner.state.lock();
            state.query.clear();
            state.generation += 1;
            state.phase = SearchPhase::Idle;
            state.results.clear();
            state.is_loading = false;
            state.show_dropdown = false;
            state.searched = false;
            state.message = None;
        }

        let weather = self.inner.weather.clone();
        async move {
            weather.fetch_weather(location.clone()).await;
            if let Some(err) = weather.error() {
                tracing::error!(error = %err, city = %location.city, "selected location failed to load");
            }
        }
    }

    /// Selects the first result of the current set. With no results the
    /// no-results message is raised instead and `None` is returned.
    pub fn submit(&self) -> Option<impl Future<Output = ()> + Send + use<>> {
        let first = self.inner.state.lock().results.first().cloned();
        match first {
            Some(location) => Some(self.select(location)),
            None => {
                self.inner.state.lock().message = Some(NO_RESULTS_MESSAGE.to_string());
                None
            }
        }
    }

    async fn run_search(&self, query: String, generation: u64) {
        {
            let mut state = self.inner.state.lock();
            if state.generation != generation {
                return;
            }
            state.phase = SearchPhase::Searching;
            state.is_loading = true;
            state.show_dropdown = true;
        }

        tracing::debug!(query = %query, "searching cities");
        let results = match self.inner.cities.search_cities(&query).await {
            Ok(results) => results,
            Err(err) => {
                tracing::error!(error = ?err, query = %query, "city search failed");
                Vec::new()
            }
        };

        let mut state = self.inner.state.lock();
        if state.generation != generation {
            return;
        }
        state.results = results;
        state.is_loading = false;
        state.searched = true;
        state.phase = SearchPhase::Results;
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.inner.pending.lock().take() {
            handle.abort();
        }
    }
}

fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}
