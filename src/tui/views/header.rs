//! Brand header

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::style::PRIMARY;

/// Render the header
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(PRIMARY)),
        Span::styled(
            "CUENTAS",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "CLARAS",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), inner);

    let online = Line::from(vec![
        Span::styled("● ", Style::default().fg(PRIMARY)),
        Span::styled("SISTEMA ONLINE ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(online).alignment(Alignment::Right), inner);
}
