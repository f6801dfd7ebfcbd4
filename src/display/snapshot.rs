//! Snapshot display formatting
//!
//! Plain-text rendering of a budget snapshot for the `stats` command.

use tabled::{settings::Style, Table, Tabled};

use super::format::{format_amount, format_date, format_metric, format_percentage, truncate};
use crate::models::{BudgetSnapshot, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fecha")]
    date: String,
    #[tabled(rename = "Concepto")]
    concept: String,
    #[tabled(rename = "Pagador")]
    payer: String,
    #[tabled(rename = "Categoría")]
    category: String,
    #[tabled(rename = "Importe")]
    amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            date: format_date(&txn.date),
            concept: truncate(&txn.concept, 30),
            payer: txn.payer.clone(),
            category: txn.category.clone(),
            amount: format_amount(txn.amount),
        }
    }
}

/// Format the status, progress and totals of a snapshot
pub fn format_snapshot_summary(snapshot: &BudgetSnapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Estado actual: {} ({})\n",
        snapshot.message,
        if snapshot.status.is_empty() { "-" } else { snapshot.status.as_str() }
    ));
    output.push_str(&format!(
        "Presupuesto usado: {}%\n",
        format_percentage(snapshot.percentage)
    ));
    output.push_str(&format!(
        "Presupuesto: {}  Gastado: {}  Disponible: {}\n",
        format_metric(snapshot.total_budget),
        format_metric(snapshot.total_spent),
        format_metric(snapshot.remaining)
    ));

    output
}

/// Format the transaction list as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No hay movimientos recientes\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{}\n", table)
}
