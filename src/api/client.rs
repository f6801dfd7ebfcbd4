//! HTTP client for the webhook backend
//!
//! Blocking `reqwest` client; callers run it off the UI thread.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;

use super::{ExpenseBackend, DELETE_PATH, INGEST_PATH, STATS_PATH};
use crate::config::Settings;
use crate::error::{ClarasError, ClarasResult};
use crate::models::{BudgetSnapshot, ExpenseId, NewExpense};

#[derive(Serialize)]
struct DeleteBody {
    #[serde(skip_serializing_if = "ExpenseId::is_missing")]
    id: ExpenseId,
}

/// Client for the three expense webhooks
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    base_url: String,
}

impl WebhookClient {
    /// Create a client for a base URL
    ///
    /// `timeout` of `None` means requests wait indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ClarasResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClarasError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the user's settings
    pub fn from_settings(settings: &Settings) -> ClarasResult<Self> {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    /// Full URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turn a non-success status into an error
fn ensure_success(response: Response, operation: &'static str) -> ClarasResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClarasError::status(operation, status.as_u16()))
    }
}

impl ExpenseBackend for WebhookClient {
    fn fetch_stats(&self) -> ClarasResult<BudgetSnapshot> {
        let response = self.http.get(self.endpoint(STATS_PATH)).send()?;
        let response = ensure_success(response, "Fetch stats")?;
        let body = response.text()?;
        BudgetSnapshot::from_json_str(&body)
    }

    fn submit_expense(&self, expense: &NewExpense) -> ClarasResult<()> {
        let response = self
            .http
            .post(self.endpoint(INGEST_PATH))
            .json(expense)
            .send()?;
        ensure_success(response, "Submit expense")?;
        Ok(())
    }

    fn delete_expense(&self, id: &ExpenseId) -> ClarasResult<()> {
        let body = DeleteBody { id: id.clone() };
        let response = self
            .http
            .delete(self.endpoint(DELETE_PATH))
            .json(&body)
            .send()?;
        ensure_success(response, "Delete expense")?;
        Ok(())
    }
}
