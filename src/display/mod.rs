//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::{format_money, format_summary};
pub use transaction::format_transaction_table;
