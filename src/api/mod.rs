//! Webhook API layer
//!
//! The three calls the client makes, the `ExpenseBackend` seam they go
//! through, and `execute`, which runs one request and records it in the
//! activity log.

pub mod client;

use crate::audit::{ActivityEntry, ActivityLogger, Operation};
use crate::error::ClarasResult;
use crate::models::{BudgetSnapshot, ExpenseId, NewExpense};

pub use client::WebhookClient;

/// Path of the dashboard stats webhook
pub const STATS_PATH: &str = "/webhook/equity-hub-stats";

/// Path of the expense ingest webhook
pub const INGEST_PATH: &str = "/webhook/equity-hub-ingest";

/// Path of the expense delete webhook
pub const DELETE_PATH: &str = "/webhook/delete-expense";

/// Operations offered by the expense backend
///
/// Any non-success status or transport failure is reported as an error;
/// response bodies of the mutating calls are ignored.
pub trait ExpenseBackend: Send + Sync {
    /// GET the current budget snapshot
    fn fetch_stats(&self) -> ClarasResult<BudgetSnapshot>;

    /// POST a new expense
    fn submit_expense(&self, expense: &NewExpense) -> ClarasResult<()>;

    /// DELETE an expense by id
    fn delete_expense(&self, id: &ExpenseId) -> ClarasResult<()>;
}

/// A request issued by one of the views
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchStats,
    SubmitExpense(NewExpense),
    DeleteExpense(ExpenseId),
}

/// Completion of an `ApiRequest`
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Stats(ClarasResult<BudgetSnapshot>),
    Submitted(ClarasResult<()>),
    Deleted {
        id: ExpenseId,
        result: ClarasResult<()>,
    },
}

/// Run a request against the backend, recording it in the activity log
///
/// Logging failures are ignored; they never change the response.
pub fn execute(
    backend: &dyn ExpenseBackend,
    request: ApiRequest,
    activity: Option<&ActivityLogger>,
) -> ApiResponse {
    let (response, entry) = match request {
        ApiRequest::FetchStats => {
            let result = backend.fetch_stats();
            let entry = ActivityEntry::from_result(Operation::FetchStats, &result);
            (ApiResponse::Stats(result), entry)
        }
        ApiRequest::SubmitExpense(expense) => {
            let result = backend.submit_expense(&expense);
            let entry = ActivityEntry::from_result(Operation::SubmitExpense, &result)
                .with_payload(&expense);
            (ApiResponse::Submitted(result), entry)
        }
        ApiRequest::DeleteExpense(id) => {
            let result = backend.delete_expense(&id);
            let entry = ActivityEntry::from_result(Operation::DeleteExpense, &result)
                .with_entity(id.clone());
            (ApiResponse::Deleted { id, result }, entry)
        }
    };

    if let Some(logger) = activity {
        let _ = logger.log(&entry);
    }

    response
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backend for tests

    use std::sync::Mutex;

    use super::*;
    use crate::error::ClarasError;

    /// Backend that records calls and answers from canned results
    #[derive(Default)]
    pub struct FakeBackend {
        pub snapshot: Mutex<Option<BudgetSnapshot>>,
        pub fail: Mutex<bool>,
        pub calls: Mutex<Vec<ApiRequest>>,
    }

    impl FakeBackend {
        pub fn with_snapshot(snapshot: BudgetSnapshot) -> Self {
            let backend = Self::default();
            *backend.snapshot.lock().unwrap() = Some(snapshot);
            backend
        }

        pub fn failing() -> Self {
            let backend = Self::default();
            *backend.fail.lock().unwrap() = true;
            backend
        }

        pub fn calls(&self) -> Vec<ApiRequest> {
            self.calls.lock().unwrap().clone()
        }

        fn outcome(&self, operation: &'static str) -> ClarasResult<()> {
            if *self.fail.lock().unwrap() {
                Err(ClarasError::status(operation, 500))
            } else {
                Ok(())
            }
        }
    }

    impl ExpenseBackend for FakeBackend {
        fn fetch_stats(&self) -> ClarasResult<BudgetSnapshot> {
            self.calls.lock().unwrap().push(ApiRequest::FetchStats);
            self.outcome("Fetch stats")?;
            Ok(self.snapshot.lock().unwrap().clone().unwrap_or_default())
        }

        fn submit_expense(&self, expense: &NewExpense) -> ClarasResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(ApiRequest::SubmitExpense(expense.clone()));
            self.outcome("Submit expense")
        }

        fn delete_expense(&self, id: &ExpenseId) -> ClarasResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(ApiRequest::DeleteExpense(id.clone()));
            self.outcome("Delete expense")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeBackend;
    use super::*;
    use crate::audit::Outcome;
    use crate::models::{Category, Payer};
    use tempfile::TempDir;

    fn expense() -> NewExpense {
        NewExpense {
            payer: Payer::Rosa,
            amount: 20.0,
            concept: "Farmacia".into(),
            category: Category::Casa,
        }
    }

    #[test]
    fn test_execute_routes_each_request() {
        let backend = FakeBackend::default();

        let response = execute(&backend, ApiRequest::FetchStats, None);
        assert!(matches!(response, ApiResponse::Stats(Ok(_))));

        let response = execute(&backend, ApiRequest::SubmitExpense(expense()), None);
        assert_eq!(response, ApiResponse::Submitted(Ok(())));

        let response = execute(&backend, ApiRequest::DeleteExpense(ExpenseId::from(4)), None);
        assert_eq!(
            response,
            ApiResponse::Deleted {
                id: ExpenseId::from(4),
                result: Ok(())
            }
        );

        assert_eq!(backend.calls().len(), 3);
    }

    #[test]
    fn test_execute_reports_failures() {
        let backend = FakeBackend::failing();
        let response = execute(&backend, ApiRequest::SubmitExpense(expense()), None);
        match response {
            ApiResponse::Submitted(Err(e)) => assert!(e.is_network()),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_execute_writes_activity_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ActivityLogger::new(temp_dir.path().join("activity.log"));
        let backend = FakeBackend::failing();

        execute(
            &backend,
            ApiRequest::DeleteExpense(ExpenseId::from("x1")),
            Some(&logger),
        );

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::DeleteExpense);
        assert_eq!(entries[0].outcome, Outcome::Failed);
        assert_eq!(entries[0].entity_id, Some(ExpenseId::from("x1")));
    }
}
