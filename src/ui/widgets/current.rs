use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{ACCENT, ERROR, MUTED, TEXT, icon_color, panel_block};
use crate::{
    app::state::AppState,
    domain::{
        units::UnitPreferences,
        weather::{CurrentWeather, Location, weather_icon, weather_label},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let snapshot = state.services.weather.snapshot();
    let block = panel_block("Now");

    let Some(data) = snapshot.weather_data.as_ref() else {
        let (text, color) = match (&snapshot.error, snapshot.loading) {
            (Some(err), _) => (err.clone(), ERROR),
            (None, true) => ("Loading weather…".to_string(), MUTED),
            (None, false) => ("Search for a city to see its weather".to_string(), MUTED),
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)).block(block),
            area,
        );
        return;
    };

    let place = snapshot
        .current_location
        .as_ref()
        .map(Location::display_name)
        .unwrap_or_default();
    let mut lines = vec![Line::from(Span::styled(
        place,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(condition_lines(&data.current));
    lines.push(Line::from(Span::styled(
        units_summary(state),
        Style::default().fg(MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn condition_lines(current: &CurrentWeather) -> Vec<Line<'static>> {
    let code = current.weather_code;
    vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", weather_icon(code).glyph()),
                Style::default().fg(icon_color(code)),
            ),
            Span::styled(weather_label(code), Style::default().fg(TEXT)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}{}", current.temperature, current.temperature_unit),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  feels like {}{}",
                    current.apparent_temperature, current.apparent_temperature_unit
                ),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::from(format!(
            "Humidity {}{}   Wind {} {}   Precipitation {} {}",
            current.relative_humidity,
            current.relative_humidity_unit,
            current.wind_speed,
            current.wind_speed_unit,
            current.precipitation,
            current.precipitation_unit,
        )),
    ]
}

fn units_summary(state: &AppState) -> String {
    let units = state.services.units.preferences();
    let system = if units.is_imperial() {
        "imperial"
    } else if units == UnitPreferences::metric() {
        "metric"
    } else {
        "custom"
    };
    format!(
        "{system} · {} · {} · {}",
        units.temperature, units.wind_speed, units.precipitation
    )
}
