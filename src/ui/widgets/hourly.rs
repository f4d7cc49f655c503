use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::{ACCENT, MUTED, TEXT, icon_color, panel_block, sparkline_blocks};
use crate::{
    app::state::AppState,
    domain::weather::{HourlyCard, hour_label, weather_icon},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block(format!("Hourly · {}", state.day_label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = state.hourly_cards();
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No hourly forecast").style(Style::default().fg(MUTED)),
            inner,
        );
        return;
    }

    let offset = state.hourly_offset.min(cards.len().saturating_sub(1));
    let slice = cards
        .iter()
        .skip(offset)
        .take(state.visible_hours())
        .collect::<Vec<_>>();

    let [table_area, trend_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
    frame.render_widget(hourly_table(&slice), table_area);

    let temps = slice.iter().map(|card| card.temperature).collect::<Vec<_>>();
    let trend = sparkline_blocks(&temps, usize::from(trend_area.width));
    frame.render_widget(
        Paragraph::new(trend).style(Style::default().fg(ACCENT)),
        trend_area,
    );
}

fn hourly_table(slice: &[&HourlyCard]) -> Table<'static> {
    let times = Row::new(
        slice
            .iter()
            .map(|card| {
                Cell::from(hour_label(&card.hour).to_string()).style(Style::default().fg(MUTED))
            })
            .collect::<Vec<_>>(),
    );
    let icons = Row::new(
        slice
            .iter()
            .map(|card| {
                Cell::from(weather_icon(card.weather_code).glyph())
                    .style(Style::default().fg(icon_color(card.weather_code)))
            })
            .collect::<Vec<_>>(),
    );
    let temps = Row::new(
        slice
            .iter()
            .map(|card| Cell::from(format!("{}°", card.temperature)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD));

    let widths = vec![Constraint::Length(6); slice.len()];
    Table::new([times, icons, temps], widths)
}
