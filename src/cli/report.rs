//! CLI commands for reports
//!
//! Implements `ledger report`, the date-range view with totals.

use std::io::Write;

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_table};
use crate::display::report::separator;
use crate::error::LedgerResult;
use crate::reports::RangeQuery;
use crate::storage::LedgerStore;
use crate::validate;

/// Handle `ledger report <start> <end>`
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    start: &str,
    end: &str,
) -> LedgerResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run_report(store, settings, start, end)?;
    write_report(&mut out, &result, settings)?;
    Ok(())
}

/// Validate both bounds and query the store
pub fn run_report(
    store: &LedgerStore,
    settings: &Settings,
    start: &str,
    end: &str,
) -> LedgerResult<RangeQuery> {
    let today = chrono::Local::now().date_naive();
    let start = validate::parse_date(start, false, today, &settings.date_format)?;
    let end = validate::parse_date(end, false, today, &settings.date_format)?;
    store.query_range(&start, &end)
}

/// Print the outcome of a range query
pub fn write_report<W: Write>(
    out: &mut W,
    result: &RangeQuery,
    settings: &Settings,
) -> LedgerResult<()> {
    if let Some(message) = result.message(&settings.date_format) {
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    if let Some(summary) = result.as_summary() {
        writeln!(
            out,
            "Transactions from {} to {}",
            summary.start_date.format(&settings.date_format),
            summary.end_date.format(&settings.date_format)
        )?;
        write!(
            out,
            "{}",
            format_transaction_table(&summary.transactions, &settings.date_format)
        )?;
        writeln!(out, "{}", separator(32))?;
        write!(out, "{}", format_summary(summary, &settings.currency_symbol))?;
    }

    Ok(())
}
