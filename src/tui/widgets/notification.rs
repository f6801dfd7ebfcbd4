//! Toast notification widget
//!
//! A toast is shown for a fixed time and then dropped on the next tick.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::display::style::PRIMARY;

/// How long a toast stays visible
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Get the color for this kind
    pub fn color(&self) -> Color {
        match self {
            Self::Success => PRIMARY,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon for this kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// When the toast appeared
    pub shown_at: Instant,
}

impl Notification {
    /// Create a notification shown at `now`
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: now,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationKind::Success, now)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationKind::Error, now)
    }

    /// Whether the toast should be gone at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_DURATION
    }

    /// Width needed to show the message with its icon and borders
    pub fn width(&self) -> u16 {
        (self.message.chars().count() + 8) as u16
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        Paragraph::new(format!(
            "{} {}",
            self.notification.kind.icon(),
            self.notification.message
        ))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_exactly_three_seconds() {
        let start = Instant::now();
        let toast = Notification::success("Gasto Guardado", start);

        assert!(!toast.is_expired_at(start));
        assert!(!toast.is_expired_at(start + Duration::from_millis(2999)));
        assert!(toast.is_expired_at(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_kind_colors() {
        let now = Instant::now();
        assert_eq!(Notification::success("ok", now).kind.color(), PRIMARY);
        assert_eq!(Notification::error("ko", now).kind.color(), Color::Red);
    }
}
