//! Report formatting utilities for terminal output

use crate::reports::RangeSummary;

/// Format a money amount with a currency symbol and two decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format the totals block of a range summary
pub fn format_summary(summary: &RangeSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("--- Summary ---\n");
    output.push_str(&format!(
        "Total Income:  {}\n",
        format_money(summary.total_income, symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {}\n",
        format_money(summary.total_expense, symbol)
    ));
    output.push_str(&format!(
        "Net Savings:   {}\n",
        format_money(summary.net_savings, symbol)
    ));
    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
