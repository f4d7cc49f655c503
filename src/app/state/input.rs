use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

pub(crate) fn is_query_char(ch: char) -> bool {
    !ch.is_control()
}

fn is_plain(key: KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

impl AppState {
    pub(super) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, tx).await?,
            Event::Resize(width, _) => {
                self.viewport_width = width;
                self.clamp_cursors();
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let units = self.services.units.clone();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Esc => {
                if self.services.search.state().show_dropdown {
                    self.services.search.dismiss();
                } else {
                    tx.send(AppEvent::Quit).await?;
                }
            }
            KeyCode::Char(ch) if is_plain(key) && is_query_char(ch) => {
                let mut query = self.services.search.query();
                query.push(ch);
                self.edit_query(query);
            }
            KeyCode::Backspace => {
                let mut query = self.services.search.query();
                if query.pop().is_some() {
                    self.edit_query(query);
                }
            }
            KeyCode::Up => self.highlighted = self.highlighted.saturating_sub(1),
            KeyCode::Down => {
                let last = self.services.search.state().results.len().saturating_sub(1);
                self.highlighted = (self.highlighted + 1).min(last);
            }
            KeyCode::Enter => self.confirm(),
            KeyCode::F(2) => units.toggle_system(),
            KeyCode::F(3) => units.set_temperature_unit(units.temperature_unit().next()),
            KeyCode::F(4) => units.set_wind_speed_unit(units.wind_speed_unit().next()),
            KeyCode::F(5) => units.set_precipitation_unit(units.precipitation_unit().next()),
            KeyCode::F(9) => self.retry(),
            KeyCode::Tab => self.cycle_day(true),
            KeyCode::BackTab => self.cycle_day(false),
            KeyCode::Left => self.hourly_offset = self.hourly_offset.saturating_sub(1),
            KeyCode::Right => {
                let hours = self.hourly_cards().len();
                let max_offset = hours.saturating_sub(self.visible_hours());
                self.hourly_offset = (self.hourly_offset + 1).min(max_offset);
            }
            _ => {}
        }
        Ok(())
    }

    fn edit_query(&mut self, query: String) {
        self.highlighted = 0;
        self.services.search.set_query(query);
    }

    /// Enter: pick the highlighted dropdown row, otherwise submit the query.
    fn confirm(&mut self) {
        let search = self.services.search.clone();
        let state = search.state();
        if state.submit_disabled() {
            return;
        }

        if state.show_dropdown
            && let Some(location) = state.results.get(self.highlighted).cloned()
        {
            tokio::spawn(search.select(location));
        } else if let Some(fetch) = search.submit() {
            tokio::spawn(fetch);
        } else {
            return;
        }

        self.message = None;
        self.highlighted = 0;
        self.hourly_offset = 0;
        self.selected_day = None;
    }

    /// Steps through the forecast days, wrapping at either end. An unknown
    /// selection restarts from the first (or last) day.
    fn cycle_day(&mut self, forward: bool) {
        let days = self.services.weather.formatted_days();
        let Some(last) = days.len().checked_sub(1) else {
            return;
        };
        let current = self
            .selected_day()
            .and_then(|day| days.iter().position(|name| *name == day));
        let next = match (current, forward) {
            (Some(idx), true) if idx < last => idx + 1,
            (Some(idx), false) if idx > 0 => idx - 1,
            (Some(_), true) | (None, true) => 0,
            (Some(_), false) | (None, false) => last,
        };
        self.select_day(days[next].clone());
    }
}
