//! Terminal User Interface module
//!
//! Two views share one shell: the expense form and the budget dashboard.
//! Webhook calls run on worker threads and report back through the event
//! channel, so the UI never blocks on the network.

pub mod app;
pub mod dispatch;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
