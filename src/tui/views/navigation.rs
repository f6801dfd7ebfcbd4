//! View switcher
//!
//! Reads the active view; switching happens in the key handler.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::display::style::PRIMARY;
use crate::tui::app::ActiveView;
use crate::tui::layout::equal_columns;

fn icon(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Inject => "⚡",
        ActiveView::Dashboard => "▦",
    }
}

/// Render the navigation bar
pub fn render(frame: &mut Frame, active: ActiveView, area: Rect) {
    let cells = equal_columns(area, ActiveView::ALL.len() as u32);

    for (index, (view, cell)) in ActiveView::ALL.iter().zip(cells).enumerate() {
        let is_active = *view == active;

        let (style, border) = if is_active {
            (
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
                PRIMARY,
            )
        } else {
            (Style::default().fg(Color::DarkGray), Color::DarkGray)
        };

        let label = format!(
            "{} {} [F{}]",
            icon(*view),
            view.label().to_uppercase(),
            index + 1
        );

        let tab = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            );

        frame.render_widget(tab, cell);
    }
}
