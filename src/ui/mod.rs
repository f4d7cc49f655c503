pub mod layout;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 20;
const HINT: &str = "Enter select · ↑/↓ results · F2 metric/imperial · F3/F4/F5 units · Tab day · F9 retry · Esc quit";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("weathervane"));
        frame.render_widget(warning, area);
        return;
    }

    let [search_area, status_area, current_area, hourly_area, daily_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Min(3),
    ])
    .areas(area);

    widgets::search::render_box(frame, search_area, state);
    render_status_line(frame, status_area, state);
    widgets::current::render(frame, current_area, state);
    widgets::hourly::render(frame, hourly_area, state);
    widgets::daily::render(frame, daily_area, state);

    let search = state.services.search.state();
    if search.show_dropdown {
        let dropdown = dropdown_rect(search_area, area, widgets::search::dropdown_height(&search));
        widgets::search::render_dropdown(frame, dropdown, state);
    }
}

/// Search feedback and app banners win over fetch errors; otherwise the key hint.
fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let weather = state.services.weather.snapshot();
    let (text, color) = if let Some(message) = state.banner() {
        (message, Color::Yellow)
    } else if let Some(err) = weather.error {
        (err, Color::LightRed)
    } else if weather.loading {
        ("Fetching weather…".to_string(), Color::Cyan)
    } else {
        (HINT.to_string(), Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(color)),
        area,
    );
}

fn dropdown_rect(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let y = anchor.bottom().saturating_sub(1);
    Rect {
        x: anchor.x + 1,
        y,
        width: anchor.width.saturating_sub(2),
        height: height.min(bounds.bottom().saturating_sub(y)),
    }
}
