//! Core data models for the ledger
//!
//! Ledger rows, the transactions they describe, and their categories.

pub mod category;
pub mod transaction;

pub use category::Category;
pub use transaction::{LedgerRow, Transaction};
