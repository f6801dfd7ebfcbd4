//! TUI Views module
//!
//! The header, the two main views, the navigation bar and the status bar.

pub mod dashboard;
pub mod header;
pub mod inject;
pub mod navigation;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::dialogs::message::MessageKind;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, layout.header);

    match app.active_view {
        ActiveView::Inject => {
            inject::render(frame, &app.expense_form, layout.main);
        }
        ActiveView::Dashboard => {
            dashboard::render(frame, &app.dashboard, app.spinner_frame, layout.main);
        }
    }

    navigation::render(frame, app.active_view, layout.navigation);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(_) => {
            dialogs::message::render(
                frame,
                MessageKind::Confirm,
                crate::tui::app::CONFIRM_DELETE_MESSAGE,
            );
        }
        ActiveDialog::Alert(message) => {
            dialogs::message::render(frame, MessageKind::Alert, message);
        }
        ActiveDialog::None => {}
    }
}
