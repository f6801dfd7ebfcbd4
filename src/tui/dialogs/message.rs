//! Message dialogs
//!
//! Delete confirmation and error alerts share one box: a title, the message
//! and a row of key hints, tinted with the dialog's accent color.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// A key hint shown under the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAction {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Which message box to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Yes/no question
    Confirm,
    /// Error with a single acknowledge action
    Alert,
}

impl MessageKind {
    fn title(self) -> &'static str {
        match self {
            Self::Confirm => " Confirmar ",
            Self::Alert => " ✖ Error ",
        }
    }

    fn accent(self) -> Color {
        match self {
            Self::Confirm => Color::Yellow,
            Self::Alert => Color::Red,
        }
    }

    /// Key hints accepted by this dialog
    pub fn actions(self) -> &'static [DialogAction] {
        const CONFIRM: [DialogAction; 3] = [
            DialogAction {
                key: "[S]",
                label: "Sí",
                color: Color::Green,
            },
            DialogAction {
                key: "[N]",
                label: "No",
                color: Color::Red,
            },
            DialogAction {
                key: "[Esc]",
                label: "Cancelar",
                color: Color::Yellow,
            },
        ];
        const ALERT: [DialogAction; 1] = [DialogAction {
            key: "[Enter]",
            label: "Aceptar",
            color: Color::Green,
        }];

        match self {
            Self::Confirm => &CONFIRM,
            Self::Alert => &ALERT,
        }
    }
}

fn action_line(actions: &[DialogAction]) -> Line<'static> {
    let spans = actions.iter().enumerate().flat_map(|(i, action)| {
        let gap = if i == 0 { "" } else { "  " };
        [
            Span::raw(gap),
            Span::styled(action.key, Style::default().fg(action.color)),
            Span::raw(format!(" {}", action.label)),
        ]
    });
    Line::from(spans.collect::<Vec<_>>())
}

/// Render a message dialog centered over the screen
pub fn render(frame: &mut Frame, kind: MessageKind, message: &str) {
    let area = centered_rect_fixed(56, 8, frame.area());
    let accent = kind.accent();

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(kind.title())
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        action_line(kind.actions()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_line_lists_hints() {
        assert_eq!(
            action_line(MessageKind::Confirm.actions()).to_string(),
            "[S] Sí  [N] No  [Esc] Cancelar"
        );
        assert_eq!(
            action_line(MessageKind::Alert.actions()).to_string(),
            "[Enter] Aceptar"
        );
    }
}
