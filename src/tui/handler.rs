//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state, and applies ticks and webhook completions.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App};
use super::event::Event;
use super::views::inject::FormField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) => Ok(()),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.on_tick(Instant::now());
            Ok(())
        }
        Event::Api(response) => {
            app.apply_response(response, Instant::now());
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Keys that work everywhere, dialogs included
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        _ => {}
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match key.code {
        KeyCode::F(1) => {
            app.switch_view(ActiveView::Inject);
            return Ok(());
        }
        KeyCode::F(2) => {
            app.switch_view(ActiveView::Dashboard);
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Inject => handle_form_key(app, key),
        ActiveView::Dashboard => handle_dashboard_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.confirm_delete();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in the expense form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let field = app.expense_form.focused_field;

    match key.code {
        KeyCode::Enter => {
            app.submit_expense();
            return Ok(());
        }
        KeyCode::Char(' ') if field == FormField::Submit => {
            app.submit_expense();
            return Ok(());
        }
        KeyCode::Char('?') if !field.is_text() => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('q') if !field.is_text() => {
            app.quit();
            return Ok(());
        }
        _ => {}
    }

    let form = &mut app.expense_form;
    match (field, key.code) {
        (_, KeyCode::Tab | KeyCode::Down) => form.next_field(),
        (_, KeyCode::BackTab | KeyCode::Up) => form.prev_field(),
        (FormField::Payer, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
            form.payer = form.payer.toggle();
        }
        (FormField::Category, KeyCode::Left) => form.category = form.category.prev(),
        (FormField::Category, KeyCode::Right | KeyCode::Char(' ')) => {
            form.category = form.category.next();
        }
        _ => {
            if let Some(input) = form.focused_input() {
                match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.insert(c)
                    }
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Handle keys in the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('j') | KeyCode::Down => app.dashboard.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.dashboard.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        // One load at a time
        KeyCode::Char('r') if !app.dashboard.loading => app.reload_dashboard(),
        KeyCode::Char('1') | KeyCode::Tab => app.switch_view(ActiveView::Inject),
        _ => {}
    }
    Ok(())
}
