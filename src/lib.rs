//! Cuentas Claras - shared expense tracking in the terminal
//!
//! A client for a small webhook backend that stores household expenses and
//! reports how much of the monthly budget is used. It offers an interactive
//! TUI (expense form and budget dashboard) and a scriptable CLI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Wire models for expenses and budget snapshots
//! - `api`: Webhook client and the `ExpenseBackend` seam
//! - `audit`: Activity log of API calls
//! - `display`: Formatting shared by the TUI and the CLI
//! - `cli`: Non-interactive command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use cuentas_claras::api::{ExpenseBackend, WebhookClient};
//! use cuentas_claras::config::{ClarasPaths, Settings};
//!
//! let paths = ClarasPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let snapshot = WebhookClient::from_settings(&settings)?.fetch_stats()?;
//! ```

pub mod api;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod tui;

pub use error::{ClarasError, ClarasResult};
