//! Transaction display formatting
//!
//! Renders ledger rows as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a table, dates rendered with `date_format`
pub fn format_transaction_table(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: txn.date.format(date_format).to_string(),
        amount: format_amount(txn.amount),
        category: txn.category.to_string(),
        description: txn.description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}

/// Two decimals, or `-` for an amount that could not be read
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}
