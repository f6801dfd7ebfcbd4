//! Expense form view
//!
//! Collects payer, amount, concept and category and produces one ingest
//! request per submit. The form keeps no history: a successful submit
//! clears the typed fields and keeps the selectors.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::api::ApiRequest;
use crate::display::parse_amount;
use crate::display::style::PRIMARY;
use crate::display::payer_accent;
use crate::error::ClarasResult;
use crate::models::{Category, NewExpense, Payer};
use crate::tui::layout::{equal_columns, toast_rect, FormLayout};
use crate::tui::widgets::{Notification, NotificationWidget, TextInput};

/// Toast shown after a successful submit
pub const SAVED_MESSAGE: &str = "Gasto Guardado";

/// Toast shown after a failed submit
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de Conexión";

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Payer,
    #[default]
    Amount,
    Concept,
    Category,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Payer,
        FormField::Amount,
        FormField::Concept,
        FormField::Category,
        FormField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Whether the field takes typed text
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Amount | FormField::Concept)
    }
}

/// State for the expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub payer: Payer,
    pub amount_input: TextInput,
    pub concept_input: TextInput,
    pub category: Category,
    pub focused_field: FormField,
    /// A submit is in flight
    pub submitting: bool,
    /// Toast from the last submit
    pub notification: Option<Notification>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// A fresh form with default selections
    pub fn new() -> Self {
        let mut state = Self {
            payer: Payer::default(),
            amount_input: TextInput::new().placeholder("0.00").text_color(PRIMARY),
            concept_input: TextInput::new().placeholder("¿Qué hay que pagar?"),
            category: Category::default(),
            focused_field: FormField::default(),
            submitting: false,
            notification: None,
        };
        state.sync_focus();
        state
    }

    fn sync_focus(&mut self) {
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.concept_input.focused = self.focused_field == FormField::Concept;
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.sync_focus();
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.sync_focus();
    }

    /// Focus a specific field
    pub fn focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.sync_focus();
    }

    /// The focused text input, if a text field has focus
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Concept => Some(&mut self.concept_input),
            _ => None,
        }
    }

    /// Whether the submit control accepts input
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.amount_input.is_empty() && !self.concept_input.is_empty()
    }

    /// Build the ingest request for the current fields
    ///
    /// Returns `None` while a submit is in flight or when amount or concept
    /// is empty. The amount is not validated beyond presence.
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if !self.can_submit() {
            return None;
        }

        self.submitting = true;
        Some(ApiRequest::SubmitExpense(NewExpense {
            payer: self.payer,
            amount: parse_amount(self.amount_input.value()),
            concept: self.concept_input.value().to_string(),
            category: self.category,
        }))
    }

    /// Apply the outcome of a submit
    pub fn on_submitted(&mut self, result: &ClarasResult<()>, now: Instant) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.amount_input.clear();
                self.concept_input.clear();
                self.notification = Some(Notification::success(SAVED_MESSAGE, now));
            }
            Err(_) => {
                self.notification = Some(Notification::error(CONNECTION_ERROR_MESSAGE, now));
            }
        }
    }

    /// Drop the toast once its time is up
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_type) = if focused {
        (Style::default().fg(PRIMARY), BorderType::Thick)
    } else {
        (Style::default().fg(Color::DarkGray), BorderType::Rounded)
    };

    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Gray))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
}

/// Render the expense form
pub fn render(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let layout = FormLayout::new(area);

    render_payers(frame, form, layout.payer);

    let block = field_block("Importe €", form.focused_field == FormField::Amount);
    let inner = block.inner(layout.amount);
    frame.render_widget(block, layout.amount);
    frame.render_widget(&form.amount_input, inner);

    let block = field_block("Concepto", form.focused_field == FormField::Concept);
    let inner = block.inner(layout.concept);
    frame.render_widget(block, layout.concept);
    frame.render_widget(&form.concept_input, inner);

    render_categories(frame, form, layout.category);
    render_submit(frame, form, layout.submit);

    if let Some(notification) = &form.notification {
        let toast_area = toast_rect(notification.width(), area);
        frame.render_widget(NotificationWidget::new(notification), toast_area);
    }
}

fn render_payers(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let focused = form.focused_field == FormField::Payer;

    for (payer, cell) in Payer::ALL.iter().zip(equal_columns(area, 2)) {
        let accent = payer_accent(*payer);
        let selected = *payer == form.payer;

        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };
        let border_type = if focused && selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(accent));

        let label = Paragraph::new(payer.name().to_uppercase())
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(label, cell);
    }
}

fn render_categories(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let focused = form.focused_field == FormField::Category;

    for (category, cell) in Category::ALL.iter().zip(equal_columns(area, 4)) {
        let selected = *category == form.category;

        let (border, text) = if selected {
            (PRIMARY, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        } else {
            (Color::DarkGray, Style::default().fg(Color::Gray))
        };
        let border_type = if focused && selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border));

        let lines = vec![
            Line::from(category.icon()),
            Line::from(Span::styled(category.name().to_uppercase(), text)),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            cell,
        );
    }
}

fn render_submit(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let label = if form.submitting {
        "Registrando..."
    } else {
        "REGISTRAR GASTO ⚡"
    };

    let mut style = if form.can_submit() {
        Style::default()
            .fg(Color::Black)
            .bg(PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if form.focused_field == FormField::Submit {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let border_type = if form.focused_field == FormField::Submit {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(PRIMARY)),
        );

    frame.render_widget(button, area);
}
