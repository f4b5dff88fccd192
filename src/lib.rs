//! ledger-cli - Terminal-based personal income and expense ledger
//!
//! This library records income and expense transactions to an append-only
//! CSV file and answers date-range queries with income, expense and net
//! savings totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, user settings and the store configuration
//! - `error`: Custom error types
//! - `models`: Ledger rows, transactions and categories
//! - `storage`: The CSV transaction store
//! - `reports`: Range summaries
//! - `validate`: Input validation and retry policy
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use ledger_cli::config::StoreConfig;
//! use ledger_cli::storage::LedgerStore;
//!
//! let store = LedgerStore::new(StoreConfig::new("finance_data.csv"));
//! store.initialize()?;
//! store.append("01-01-2024", 100.0, "income", "salary")?;
//! let result = store.query_range("01-01-2024", "31-01-2024")?;
//! println!("net savings: {}", result.net_savings());
//! # Ok::<(), ledger_cli::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validate;

pub use error::{LedgerError, LedgerResult};
