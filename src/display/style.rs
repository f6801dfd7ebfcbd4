//! Status and payer styling
//!
//! Maps backend codes and names to terminal colors and glyphs.

use ratatui::style::Color;

use crate::models::{BudgetStatus, Payer};

/// Accent color of the app (lime)
pub const PRIMARY: Color = Color::Rgb(132, 204, 22);

/// Accent for Ricky
pub const RICKY_COLOR: Color = Color::Rgb(6, 182, 212);

/// Accent for Rosa
pub const ROSA_COLOR: Color = Color::Rgb(232, 121, 249);

/// Muted foreground used for anyone else and for secondary text
pub const NEUTRAL: Color = Color::Gray;

/// Colors and icon for the status card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub fg: Color,
    pub border: Color,
    pub icon: &'static str,
}

/// Style for a budget status; unknown values get the neutral style
pub fn status_style(status: BudgetStatus) -> StatusStyle {
    match status {
        BudgetStatus::Green => StatusStyle {
            fg: Color::Rgb(52, 211, 153),
            border: Color::Rgb(16, 185, 129),
            icon: "✔",
        },
        BudgetStatus::Yellow => StatusStyle {
            fg: Color::Rgb(250, 204, 21),
            border: Color::Rgb(234, 179, 8),
            icon: "⚠",
        },
        BudgetStatus::Red => StatusStyle {
            fg: Color::Rgb(248, 113, 113),
            border: Color::Rgb(239, 68, 68),
            icon: "✖",
        },
        BudgetStatus::Unknown => StatusStyle {
            fg: Color::White,
            border: Color::DarkGray,
            icon: "$",
        },
    }
}

/// Accent color for a payer name as written by the backend
///
/// Case-insensitive substring match, checked for "ricky" before "rosa".
pub fn payer_color(name: &str) -> Color {
    let lower = name.to_lowercase();
    if lower.contains("ricky") {
        RICKY_COLOR
    } else if lower.contains("rosa") {
        ROSA_COLOR
    } else {
        NEUTRAL
    }
}

/// Accent color for a payer in the form selector
pub fn payer_accent(payer: Payer) -> Color {
    match payer {
        Payer::Ricky => RICKY_COLOR,
        Payer::Rosa => ROSA_COLOR,
    }
}

/// Fill color of the progress bar for a percentage
pub fn progress_color(percentage: Option<f64>) -> Color {
    match percentage {
        Some(p) if p > 90.0 => Color::Rgb(239, 68, 68),
        Some(p) if p > 75.0 => Color::Rgb(234, 179, 8),
        _ => PRIMARY,
    }
}
