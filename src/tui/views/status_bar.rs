//! Status bar view
//!
//! Shows the backend host and key hints for the current context

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};

/// Key context of the current screen
pub fn current_context(app: &App) -> KeyContext {
    if app.has_dialog() {
        return KeyContext::Dialog;
    }
    match app.active_view {
        ActiveView::Inject => KeyContext::Inject,
        ActiveView::Dashboard => KeyContext::Dashboard,
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let host = format!(" {} ", app.settings.api_base_url);

    let hints = get_keybindings(current_context(app))
        .into_iter()
        .map(|kb| format!("{}:{}", format_keybinding(kb), kb.description))
        .collect::<Vec<_>>()
        .join("  ");
    let hints = format!("{} ", hints);

    let used = host.chars().count() + hints.chars().count();
    let padding = " ".repeat((area.width as usize).saturating_sub(used).max(1));

    let line = Line::from(vec![
        Span::styled(host, Style::default().fg(Color::DarkGray)),
        Span::raw(padding),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
