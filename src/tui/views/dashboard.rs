//! Dashboard view
//!
//! Shows the budget status, usage bar, totals and recent expenses from the
//! last stats snapshot.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::Title, Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table, TableState,
    },
    Frame,
};

use crate::api::ApiRequest;
use crate::display::style::PRIMARY;
use crate::display::{
    format_amount, format_date, format_metric, format_percentage, payer_color, progress_color,
    progress_ratio, status_style, truncate,
};
use crate::error::ClarasResult;
use crate::models::{BudgetSnapshot, ExpenseId, Transaction};
use crate::tui::layout::{centered_rect_fixed, DashboardLayout};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// State for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Last successfully loaded snapshot
    pub snapshot: Option<BudgetSnapshot>,
    pub loading: bool,
    /// The last load failed
    pub error: bool,
    /// Selected row in the transaction list
    pub selected_index: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// A freshly mounted dashboard, waiting for its first load
    pub fn new() -> Self {
        Self {
            snapshot: None,
            loading: true,
            error: false,
            selected_index: 0,
        }
    }

    /// Start a load
    pub fn load(&mut self) -> ApiRequest {
        self.loading = true;
        ApiRequest::FetchStats
    }

    /// Apply the outcome of a load
    ///
    /// A failed load keeps the previous snapshot but the view shows the
    /// error state until the next successful load.
    pub fn on_stats(&mut self, result: ClarasResult<BudgetSnapshot>) {
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.error = false;
                self.clamp_selection();
            }
            Err(_) => {
                self.error = true;
            }
        }
    }

    /// Transactions of the current snapshot
    pub fn transactions(&self) -> &[Transaction] {
        self.snapshot
            .as_ref()
            .map(|s| s.transactions.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the content (not the loading or error screen) is shown
    pub fn is_showing_content(&self) -> bool {
        !self.loading && !self.error && self.snapshot.is_some()
    }

    fn clamp_selection(&mut self) {
        let len = self.transactions().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.transactions().len() {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Id of the selected transaction, when one is visible
    pub fn selected_id(&self) -> Option<ExpenseId> {
        if !self.is_showing_content() {
            return None;
        }
        self.transactions()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }
}

/// Render the dashboard
pub fn render(frame: &mut Frame, state: &DashboardState, spinner_frame: usize, area: Rect) {
    match &state.snapshot {
        _ if state.loading => render_loading(frame, spinner_frame, area),
        Some(snapshot) if !state.error => render_content(frame, state, snapshot, area),
        _ => render_error(frame, area),
    }
}

fn render_loading(frame: &mut Frame, spinner_frame: usize, area: Rect) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let text = Paragraph::new(vec![
        Line::from(Span::styled(spinner, Style::default().fg(PRIMARY))),
        Line::from(""),
        Line::from(Span::styled(
            "Sincronizando datos...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(text, centered_rect_fixed(area.width, 3, area));
}

fn render_error(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "Error al obtener datos.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Verifica tu conexión.",
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Reintentar",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(text, centered_rect_fixed(area.width, 6, area));
}

fn render_content(frame: &mut Frame, state: &DashboardState, snapshot: &BudgetSnapshot, area: Rect) {
    let layout = DashboardLayout::new(area);

    render_status(frame, snapshot, layout.status);
    render_progress(frame, snapshot, layout.progress);

    let metrics = [
        ("Presupuesto", snapshot.total_budget, false),
        ("Gastado", snapshot.total_spent, true),
        ("Disponible", snapshot.remaining, false),
    ];
    for ((label, value, highlight), cell) in metrics.into_iter().zip(layout.metrics) {
        render_metric(frame, label, value, highlight, cell);
    }

    render_transactions(frame, state, layout.transactions);
}

fn render_status(frame: &mut Frame, snapshot: &BudgetSnapshot, area: Rect) {
    let style = status_style(snapshot.budget_status());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.border))
        .title(Title::from(format!(" {} ", style.icon)).alignment(Alignment::Right));

    let lines = vec![
        Line::from(Span::styled(
            "ESTADO ACTUAL",
            Style::default().fg(style.fg).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            snapshot.message.as_str(),
            Style::default().fg(style.fg).add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_progress(frame: &mut Frame, snapshot: &BudgetSnapshot, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Presupuesto Usado ")
        .title(
            Title::from(Span::styled(
                format!(" {}% ", format_percentage(snapshot.percentage)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(progress_color(snapshot.percentage))
                .bg(Color::Black),
        )
        .ratio(progress_ratio(snapshot.percentage))
        .label("");

    frame.render_widget(gauge, area);
}

fn render_metric(frame: &mut Frame, label: &str, value: Option<f64>, highlight: bool, area: Rect) {
    let border = if highlight { Color::Gray } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", label))
        .title_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(format!("{}€", format_metric(value)))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(text, area);
}

fn render_transactions(frame: &mut Frame, state: &DashboardState, area: Rect) {
    let block = Block::default()
        .title(" Últimos Movimientos ")
        .title_style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let transactions = state.transactions();
    if transactions.is_empty() {
        let empty = Paragraph::new("No hay movimientos recientes")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let concept_width = area.width.saturating_sub(32).max(8) as usize;

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(truncate(&txn.concept, concept_width))
                    .style(Style::default().fg(Color::White)),
                Cell::from(format_date(&txn.date)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(txn.payer.clone()).style(Style::default().fg(payer_color(&txn.payer))),
                Cell::from(Line::from(format!("{}€", format_amount(txn.amount))).right_aligned())
                    .style(Style::default().fg(PRIMARY)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(8),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected_index));

    frame.render_stateful_widget(table, area, &mut table_state);
}
