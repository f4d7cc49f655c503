mod input;

use anyhow::Result;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    app::{
        events::{AppEvent, spawn_location_lookup, start_frame_task},
        services::{Services, StartupTarget},
    },
    cli::Cli,
    domain::weather::{HourlyCard, Location},
    ui::layout::visible_hour_count,
};

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub services: Services,
    pub startup: StartupTarget,
    /// Dropdown row under the cursor.
    pub highlighted: usize,
    pub hourly_offset: usize,
    /// Day picked for the hourly panel; `None` follows the observation day.
    pub selected_day: Option<String>,
    pub viewport_width: u16,
    /// Banner shown above the forecast; cleared by a successful selection.
    pub message: Option<String>,
    unit_watcher: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(services: Services, startup: StartupTarget) -> Self {
        Self {
            running: true,
            services,
            startup,
            highlighted: 0,
            hourly_offset: 0,
            selected_day: None,
            viewport_width: 80,
            message: None,
            unit_watcher: None,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), cli.fps);
                self.unit_watcher = Some(self.services.weather.spawn_unit_watcher());
                self.start(tx);
            }
            AppEvent::TickFrame => self.clamp_cursors(),
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::LocationResolved(location) => {
                tracing::debug!(city = %location.city, "location resolved");
                self.load(location);
            }
            AppEvent::LocationFailed(message) => {
                self.message = Some(message);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }

        Ok(())
    }

    /// Message line contents: search feedback first, then the app banner.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        self.services.search.message().or_else(|| self.message.clone())
    }

    #[must_use]
    pub fn visible_hours(&self) -> usize {
        visible_hour_count(self.viewport_width)
    }

    /// Day whose hours the hourly panel shows.
    #[must_use]
    pub fn selected_day(&self) -> Option<String> {
        self.selected_day
            .clone()
            .or_else(|| self.services.weather.current_day())
    }

    /// Panel label for the selected day, `-` while a fetch is in flight.
    #[must_use]
    pub fn day_label(&self) -> String {
        if self.services.weather.is_loading() {
            return "-".to_string();
        }
        self.selected_day().unwrap_or_else(|| "-".to_string())
    }

    #[must_use]
    pub fn hourly_cards(&self) -> Vec<HourlyCard> {
        self.selected_day()
            .map(|day| self.services.weather.hourly_for_day(&day))
            .unwrap_or_default()
    }

    pub fn select_day(&mut self, day: impl Into<String>) {
        self.selected_day = Some(day.into());
        self.hourly_offset = 0;
    }

    fn start(&mut self, tx: &mpsc::Sender<AppEvent>) {
        match self.startup.clone() {
            StartupTarget::Coordinates(location) => self.load(location),
            StartupTarget::City(city) => {
                let search = self.services.search.clone();
                tokio::spawn(async move {
                    search.search_now(&city).await;
                    if let Some(fetch) = search.submit() {
                        fetch.await;
                    }
                });
            }
            StartupTarget::Detect => {
                spawn_location_lookup(tx.clone(), self.services.locator.clone());
            }
        }
    }

    fn load(&mut self, location: Location) {
        self.hourly_offset = 0;
        self.selected_day = None;
        let weather = self.services.weather.clone();
        tokio::spawn(async move { weather.fetch_weather(location).await });
    }

    fn retry(&mut self) {
        match self.services.weather.current_location() {
            Some(location) => self.load(location),
            None => tracing::debug!("nothing to retry"),
        }
    }

    fn clamp_cursors(&mut self) {
        let results = self.services.search.state().results.len();
        self.highlighted = self.highlighted.min(results.saturating_sub(1));
        let hours = self.hourly_cards().len();
        self.hourly_offset = self
            .hourly_offset
            .min(hours.saturating_sub(self.visible_hours()));
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        if let Some(watcher) = self.unit_watcher.take() {
            watcher.abort();
        }
    }
}
