//! Expense CLI commands
//!
//! `stats`, `add` and `delete`. Every call goes through `api::execute`, so
//! it lands in the activity log like the TUI's calls do.

use std::io::{self, BufRead, Write};

use crate::api::{execute, ApiRequest, ApiResponse, ExpenseBackend};
use crate::audit::ActivityLogger;
use crate::display::{format_amount, format_snapshot_summary, format_transaction_table, parse_amount};
use crate::error::{ClarasError, ClarasResult};
use crate::models::{BudgetSnapshot, Category, ExpenseId, NewExpense, Payer};

/// Build an expense from command-line input
///
/// Same rule as the form: amount and concept must be non-empty, the amount
/// is otherwise unchecked.
pub fn build_expense(
    amount: &str,
    concept: &str,
    payer: Payer,
    category: Category,
) -> ClarasResult<NewExpense> {
    if amount.is_empty() {
        return Err(ClarasError::Validation("Amount is required".into()));
    }
    if concept.is_empty() {
        return Err(ClarasError::Validation("Concept is required".into()));
    }

    Ok(NewExpense {
        payer,
        amount: parse_amount(amount),
        concept: concept.to_string(),
        category,
    })
}

/// Render a snapshot for the terminal
pub fn render_stats(snapshot: &BudgetSnapshot, json: bool) -> ClarasResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(snapshot)?);
    }

    Ok(format!(
        "{}\n{}",
        format_snapshot_summary(snapshot),
        format_transaction_table(&snapshot.transactions)
    ))
}

/// Ask a yes/no question; anything but "y"/"s" is no
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> ClarasResult<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    ))
}

/// Handle `stats`
pub fn handle_stats_command(
    backend: &dyn ExpenseBackend,
    activity: Option<&ActivityLogger>,
    json: bool,
) -> ClarasResult<()> {
    match execute(backend, ApiRequest::FetchStats, activity) {
        ApiResponse::Stats(result) => {
            let snapshot = result?;
            println!("{}", render_stats(&snapshot, json)?);
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}

/// Handle `add`
pub fn handle_add_command(
    backend: &dyn ExpenseBackend,
    activity: Option<&ActivityLogger>,
    amount: &str,
    concept: &str,
    payer: Payer,
    category: Category,
) -> ClarasResult<()> {
    let expense = build_expense(amount, concept, payer, category)?;
    let summary = format!(
        "{} {}€ ({}, {})",
        expense.concept,
        format_amount(Some(expense.amount)),
        expense.payer,
        expense.category
    );

    match execute(backend, ApiRequest::SubmitExpense(expense), activity) {
        ApiResponse::Submitted(result) => {
            result?;
            println!("Gasto guardado: {}", summary);
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}

/// Handle `delete`
pub fn handle_delete_command(
    backend: &dyn ExpenseBackend,
    activity: Option<&ActivityLogger>,
    id: &str,
    yes: bool,
) -> ClarasResult<()> {
    let id = ExpenseId::parse(id);

    if !yes {
        let stdin = io::stdin();
        let prompt = format!("¿Seguro que quieres borrar el gasto {}?", id);
        if !confirm(&prompt, &mut stdin.lock(), &mut io::stdout())? {
            println!("Cancelado");
            return Ok(());
        }
    }

    match execute(backend, ApiRequest::DeleteExpense(id), activity) {
        ApiResponse::Deleted { id, result } => {
            result?;
            println!("Gasto borrado: {}", id);
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}

fn unexpected(response: ApiResponse) -> ClarasError {
    ClarasError::Http(format!("Unexpected response: {:?}", response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use crate::models::Transaction;
    use std::io::Cursor;

    #[test]
    fn test_build_expense_requires_fields() {
        let err = build_expense("", "Pan", Payer::Ricky, Category::Super).unwrap_err();
        assert!(err.is_validation());

        let err = build_expense("3", "", Payer::Ricky, Category::Super).unwrap_err();
        assert!(err.is_validation());

        let expense = build_expense("3.5€", "Pan", Payer::Rosa, Category::Casa).unwrap();
        assert_eq!(expense.amount, 3.5);
        assert_eq!(expense.payer, Payer::Rosa);
    }

    #[test]
    fn test_add_validation_happens_before_network() {
        let backend = FakeBackend::default();
        let result = handle_add_command(&backend, None, "12", "", Payer::Ricky, Category::Ocio);
        assert!(result.is_err());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_add_reports_backend_failure() {
        let backend = FakeBackend::failing();
        let err = handle_add_command(&backend, None, "12", "Cena", Payer::Ricky, Category::Ocio)
            .unwrap_err();
        assert!(matches!(err, ClarasError::Status { status: 500, .. }));
    }

    #[test]
    fn test_delete_with_yes_sends_numeric_id() {
        let backend = FakeBackend::default();
        handle_delete_command(&backend, None, "42", true).unwrap();
        assert_eq!(
            backend.calls(),
            vec![ApiRequest::DeleteExpense(ExpenseId::from(42))]
        );
    }

    #[test]
    fn test_confirm_answers() {
        let mut out = Vec::new();
        assert!(confirm("Borrar?", &mut Cursor::new("s\n"), &mut out).unwrap());
        assert!(confirm("Borrar?", &mut Cursor::new("Y\n"), &mut out).unwrap());
        assert!(!confirm("Borrar?", &mut Cursor::new("\n"), &mut out).unwrap());
        assert!(!confirm("Borrar?", &mut Cursor::new("nope\n"), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().starts_with("Borrar? [y/N]"));
    }

    #[test]
    fn test_render_stats() {
        let snapshot = BudgetSnapshot {
            percentage: Some(50.0),
            message: "Vamos bien".into(),
            status: "VERDE".into(),
            transactions: vec![Transaction {
                id: ExpenseId::from(1),
                concept: "Pan".into(),
                amount: Some(1.2),
                ..Default::default()
            }],
            ..Default::default()
        };

        let text = render_stats(&snapshot, false).unwrap();
        assert!(text.contains("Vamos bien"));
        assert!(text.contains("Pan"));

        let json = render_stats(&snapshot, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["transactions"][0]["concepto"], "Pan");
    }
}
