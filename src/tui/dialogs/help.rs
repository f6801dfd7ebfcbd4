//! Help dialog
//!
//! Shows the keyboard shortcuts for the current view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::style::PRIMARY;
use crate::tui::app::{ActiveView, App};
use crate::tui::keybindings::{format_keybinding, KeyContext, KEYBINDINGS};
use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let lines = help_lines(app.active_view);
    let area = centered_rect_fixed(52, lines.len() as u16 + 2, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Ayuda ")
        .title_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PRIMARY));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_lines(context: KeyContext) -> impl Iterator<Item = Line<'static>> {
    KEYBINDINGS
        .iter()
        .filter(move |kb| kb.context == context)
        .map(|kb| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<12}", format_keybinding(kb)),
                    Style::default().fg(PRIMARY),
                ),
                Span::raw(kb.description),
            ])
        })
}

/// Help lines for a view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![section("General")];
    lines.extend(key_lines(KeyContext::Global));
    lines.push(Line::from(""));

    match view {
        ActiveView::Inject => {
            lines.push(section("Registro"));
            lines.extend(key_lines(KeyContext::Inject));
        }
        ActiveView::Dashboard => {
            lines.push(section("Panel"));
            lines.extend(key_lines(KeyContext::Dashboard));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc para cerrar",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
