use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::{MUTED, TEXT, icon_color, panel_block};
use crate::{
    app::state::AppState,
    domain::weather::{DailyCard, weather_icon, weather_label},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block("Daily");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let weather = &state.services.weather;
    let cards = weather.daily_data();
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No daily forecast").style(Style::default().fg(MUTED)),
            inner,
        );
        return;
    }

    let rows = cards
        .iter()
        .zip(weather.formatted_days())
        .map(|(card, day)| daily_row(card, day))
        .collect::<Vec<_>>();
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .column_spacing(1);
    frame.render_widget(table, inner);
}

fn daily_row(card: &DailyCard, day: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(day).style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        Cell::from(weather_icon(card.weather_code).glyph())
            .style(Style::default().fg(icon_color(card.weather_code))),
        Cell::from(format!("{}° / {}°", card.max_temp, card.min_temp)),
        Cell::from(weather_label(card.weather_code)).style(Style::default().fg(MUTED)),
    ])
}
