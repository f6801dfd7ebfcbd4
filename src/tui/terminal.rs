//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::api::ExpenseBackend;
use crate::audit::ActivityLogger;
use crate::config::Settings;
use crate::error::ClarasError;

use super::app::App;
use super::dispatch::Dispatcher;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(
    settings: &Settings,
    backend: Arc<dyn ExpenseBackend>,
    activity: Option<ActivityLogger>,
) -> Result<()> {
    let mut terminal = init_terminal()?;

    let events = EventHandler::new(settings.tick_rate());
    let dispatcher = Dispatcher::new(backend, events.sender(), activity);

    let mut app = App::new(settings);
    app.start();

    let result = run_loop(&mut terminal, &mut app, &events, &dispatcher);

    // Restore even when the loop failed
    restore_terminal()?;
    result
}

fn run_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    dispatcher: &Dispatcher,
) -> Result<()> {
    loop {
        for request in app.take_requests() {
            dispatcher.dispatch(request);
        }

        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| ClarasError::Tui("event channel closed".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
