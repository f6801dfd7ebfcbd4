//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Views never talk to the network: they queue `ApiRequest`s in the outbox,
//! which the terminal loop drains and hands to the dispatcher.

use std::mem;
use std::time::Instant;

use crate::api::{ApiRequest, ApiResponse};
use crate::config::Settings;

use super::views::dashboard::DashboardState;
use super::views::inject::ExpenseFormState;

/// Message shown when a delete fails
pub const DELETE_FAILED_MESSAGE: &str = "Error al borrar el gasto. Por favor, inténtalo de nuevo.";

/// Question asked before deleting
pub const CONFIRM_DELETE_MESSAGE: &str = "¿Seguro que quieres borrar este gasto?";

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Expense form
    #[default]
    Inject,
    /// Budget dashboard
    Dashboard,
}

impl ActiveView {
    /// All views in navigation order
    pub const ALL: [ActiveView; 2] = [ActiveView::Inject, ActiveView::Dashboard];

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inject => "Registro",
            Self::Dashboard => "Panel",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Waiting for the user to confirm deleting this expense
    ConfirmDelete(crate::models::ExpenseId),
    /// Blocking message; dismissed with any confirm key
    Alert(String),
}

/// Main application state
pub struct App<'a> {
    /// User settings
    pub settings: &'a Settings,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Currently active view
    pub active_view: ActiveView,
    /// Currently active dialog
    pub active_dialog: ActiveDialog,
    /// Expense form state
    pub expense_form: ExpenseFormState,
    /// Dashboard state
    pub dashboard: DashboardState,
    /// Frame of the loading spinner
    pub spinner_frame: usize,
    /// Requests waiting to be dispatched
    outbox: Vec<ApiRequest>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::None,
            expense_form: ExpenseFormState::new(),
            dashboard: DashboardState::new(),
            spinner_frame: 0,
            outbox: Vec::new(),
        }
    }

    /// Mount the initial view
    pub fn start(&mut self) {
        self.mount(self.active_view);
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a request for the dispatcher
    pub fn request(&mut self, request: ApiRequest) {
        self.outbox.push(request);
    }

    /// Take all queued requests
    pub fn take_requests(&mut self) -> Vec<ApiRequest> {
        mem::take(&mut self.outbox)
    }

    /// Switch to a different view
    ///
    /// Activating a view mounts it fresh; selecting the active view again
    /// does nothing.
    pub fn switch_view(&mut self, view: ActiveView) {
        if self.active_view == view {
            return;
        }
        self.active_view = view;
        self.mount(view);
    }

    fn mount(&mut self, view: ActiveView) {
        match view {
            ActiveView::Inject => {
                self.expense_form = ExpenseFormState::new();
            }
            ActiveView::Dashboard => {
                self.dashboard = DashboardState::new();
                self.reload_dashboard();
            }
        }
    }

    /// Start a dashboard load
    pub fn reload_dashboard(&mut self) {
        let request = self.dashboard.load();
        self.request(request);
    }

    /// Submit the expense form if it is complete
    pub fn submit_expense(&mut self) {
        if let Some(request) = self.expense_form.submit() {
            self.request(request);
        }
    }

    /// Ask to delete the selected expense
    pub fn request_delete(&mut self) {
        if let Some(id) = self.dashboard.selected_id() {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        }
    }

    /// The user accepted the delete confirmation
    pub fn confirm_delete(&mut self) {
        if let ActiveDialog::ConfirmDelete(id) = mem::take(&mut self.active_dialog) {
            self.request(ApiRequest::DeleteExpense(id));
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Apply a webhook completion
    ///
    /// Completions always land on the current state, even if the view that
    /// asked for them has been remounted since.
    pub fn apply_response(&mut self, response: ApiResponse, now: Instant) {
        match response {
            ApiResponse::Stats(result) => self.dashboard.on_stats(result),
            ApiResponse::Submitted(result) => self.expense_form.on_submitted(&result, now),
            ApiResponse::Deleted { result: Ok(()), .. } => {
                if self.active_view == ActiveView::Dashboard {
                    self.reload_dashboard();
                }
            }
            ApiResponse::Deleted { result: Err(_), .. } => {
                self.open_dialog(ActiveDialog::Alert(DELETE_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Periodic update
    pub fn on_tick(&mut self, now: Instant) {
        self.expense_form.expire_notification(now);
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClarasError;
    use crate::models::{BudgetSnapshot, ExpenseId, Transaction};
    use crate::tui::widgets::NotificationKind;
    use std::time::Duration;

    fn snapshot(ids: &[i64]) -> BudgetSnapshot {
        BudgetSnapshot {
            transactions: ids
                .iter()
                .map(|id| Transaction {
                    id: ExpenseId::from(*id),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn on_dashboard<'a>(settings: &'a Settings, ids: &[i64]) -> App<'a> {
        let mut app = App::new(settings);
        app.start();
        app.switch_view(ActiveView::Dashboard);
        app.take_requests();
        app.apply_response(ApiResponse::Stats(Ok(snapshot(ids))), Instant::now());
        app
    }

    #[test]
    fn test_starts_on_form_without_requests() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.start();
        assert_eq!(app.active_view, ActiveView::Inject);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_switching_to_dashboard_loads() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_view(ActiveView::Dashboard);

        assert_eq!(app.take_requests(), vec![ApiRequest::FetchStats]);
        assert!(app.dashboard.loading);

        // Same view again is not a remount
        app.switch_view(ActiveView::Dashboard);
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_switching_to_form_resets_it() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.expense_form.payer = crate::models::Payer::Rosa;
        app.expense_form.amount_input.insert('7');

        app.switch_view(ActiveView::Dashboard);
        app.switch_view(ActiveView::Inject);

        assert_eq!(app.expense_form.payer, crate::models::Payer::Ricky);
        assert!(app.expense_form.amount_input.is_empty());
    }

    #[test]
    fn test_declined_confirmation_sends_nothing() {
        let settings = Settings::default();
        let mut app = on_dashboard(&settings, &[1, 2]);

        app.request_delete();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::ConfirmDelete(ExpenseId::from(1))
        );

        app.close_dialog();
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_delete_success_reloads_once() {
        let settings = Settings::default();
        let mut app = on_dashboard(&settings, &[1, 2]);

        app.dashboard.move_down();
        app.request_delete();
        app.confirm_delete();
        assert!(!app.has_dialog());
        assert_eq!(
            app.take_requests(),
            vec![ApiRequest::DeleteExpense(ExpenseId::from(2))]
        );

        app.apply_response(
            ApiResponse::Deleted {
                id: ExpenseId::from(2),
                result: Ok(()),
            },
            Instant::now(),
        );
        assert_eq!(app.take_requests(), vec![ApiRequest::FetchStats]);

        app.apply_response(ApiResponse::Stats(Ok(snapshot(&[1]))), Instant::now());
        let listed = app.dashboard.snapshot.as_ref().unwrap();
        assert!(!listed.contains(&ExpenseId::from(2)));
    }

    #[test]
    fn test_delete_failure_alerts_without_reload() {
        let settings = Settings::default();
        let mut app = on_dashboard(&settings, &[1]);

        app.request_delete();
        app.confirm_delete();
        app.take_requests();

        app.apply_response(
            ApiResponse::Deleted {
                id: ExpenseId::from(1),
                result: Err(ClarasError::status("Delete expense", 500)),
            },
            Instant::now(),
        );

        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert(DELETE_FAILED_MESSAGE.to_string())
        );
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_delete_needs_visible_selection() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_view(ActiveView::Dashboard);

        // Still loading
        app.request_delete();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_submit_round_trip_and_toast_expiry() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.start();

        app.submit_expense();
        assert!(app.take_requests().is_empty());

        app.expense_form.amount_input.insert('5');
        app.expense_form.concept_input.insert('x');
        app.submit_expense();
        assert_eq!(app.take_requests().len(), 1);

        let now = Instant::now();
        app.apply_response(ApiResponse::Submitted(Ok(())), now);
        assert_eq!(
            app.expense_form.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Success)
        );

        app.on_tick(now + Duration::from_millis(3000));
        assert!(app.expense_form.notification.is_none());
    }
}
