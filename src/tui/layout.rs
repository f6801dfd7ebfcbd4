//! Layout definitions for the TUI
//!
//! The shell is a header, the active view, the navigation bar and a one-line
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the content column gets on large terminals
pub const CONTENT_MAX_WIDTH: u16 = 72;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Brand header
    pub header: Rect,
    /// Active view
    pub main: Rect,
    /// View switcher
    pub navigation: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Main area
                Constraint::Length(3), // Navigation
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: centered_column(chunks[1], CONTENT_MAX_WIDTH),
            navigation: centered_column(chunks[2], CONTENT_MAX_WIDTH),
            status_bar: chunks[3],
        }
    }
}

/// Layout for the expense form
pub struct FormLayout {
    pub payer: Rect,
    pub amount: Rect,
    pub concept: Rect,
    pub category: Rect,
    pub submit: Rect,
}

impl FormLayout {
    /// Calculate form layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Payer selector
                Constraint::Length(3), // Amount
                Constraint::Length(3), // Concept
                Constraint::Length(4), // Categories
                Constraint::Length(3), // Submit button
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            payer: chunks[0],
            amount: chunks[1],
            concept: chunks[2],
            category: chunks[3],
            submit: chunks[4],
        }
    }
}

/// Layout for the dashboard content
pub struct DashboardLayout {
    /// Budget status card
    pub status: Rect,
    /// Progress bar
    pub progress: Rect,
    /// Budget, spent and remaining metrics
    pub metrics: [Rect; 3],
    /// Recent transactions
    pub transactions: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Status card
                Constraint::Length(3), // Progress
                Constraint::Length(4), // Metrics
                Constraint::Min(4),    // Transactions
            ])
            .split(area);

        let metrics = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[2]);

        Self {
            status: chunks[0],
            progress: chunks[1],
            metrics: [metrics[0], metrics[1], metrics[2]],
            transactions: chunks[3],
        }
    }
}

/// Split an area into `n` equal columns
pub fn equal_columns(area: Rect, n: u32) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Center a column of at most `max_width` inside an area
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast at the top of `r`
pub fn toast_rect(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, 3.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.navigation.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.width, CONTENT_MAX_WIDTH);
        assert_eq!(layout.main.x, 14);
    }

    #[test]
    fn test_centered_rects_fit_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(50, 7, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));

        let toast = toast_rect(30, area);
        assert_eq!(toast.width, 20);
        assert_eq!(toast.height, 3);
    }
}
