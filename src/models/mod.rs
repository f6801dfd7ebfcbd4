//! Data models for Cuentas Claras
//!
//! Expenses, the submission payload, and the budget snapshot exchanged with
//! the webhook backend.

pub mod expense;
pub mod lenient;
pub mod snapshot;

pub use expense::{Category, ExpenseId, NewExpense, Payer, Transaction};
pub use snapshot::{BudgetSnapshot, BudgetStatus};
