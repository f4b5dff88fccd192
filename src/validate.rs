//! Input validation
//!
//! Turns raw user input into the values the store expects. The store does
//! not re-check any of this except category casing.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;

/// Validate a date, returning it re-rendered in `date_format`
///
/// Empty input is today's date when `allow_default` is set.
pub fn parse_date(
    input: &str,
    allow_default: bool,
    today: NaiveDate,
    date_format: &str,
) -> LedgerResult<String> {
    let input = input.trim();

    if input.is_empty() && allow_default {
        return Ok(today.format(date_format).to_string());
    }

    NaiveDate::parse_from_str(input, date_format)
        .map(|date| date.format(date_format).to_string())
        .map_err(|_| {
            LedgerError::Validation(format!(
                "Invalid date format '{}'. Please enter the date as {}",
                input,
                pattern_hint(date_format)
            ))
        })
}

/// Validate an amount: a finite number greater than zero
pub fn parse_amount(input: &str) -> LedgerResult<f64> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid amount '{}'", input.trim())))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::Validation(
            "Amount must be a positive, non-zero value".into(),
        ));
    }

    Ok(amount)
}

/// Validate a category: `I`/`E` shorthands or the full label, any case
pub fn parse_category(input: &str) -> LedgerResult<Category> {
    match input.trim().to_ascii_uppercase().as_str() {
        "I" | "INCOME" => Ok(Category::Income),
        "E" | "EXPENSE" => Ok(Category::Expense),
        _ => Err(LedgerError::Validation(format!(
            "Invalid category '{}'. Use 'I' for Income or 'E' for Expense",
            input.trim()
        ))),
    }
}

/// Descriptions are optional; only surrounding whitespace is removed
pub fn parse_description(input: &str) -> String {
    input.trim().to_string()
}

fn pattern_hint(date_format: &str) -> String {
    date_format
        .replace("%d", "DD")
        .replace("%m", "MM")
        .replace("%Y", "YYYY")
}

/// How many times to ask again after invalid input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// `None` retries until valid input arrives
    max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Keep asking until the input is valid
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `attempts` tries (at least one)
    pub fn bounded(attempts: u32) -> Self {
        Self {
            max_attempts: Some(attempts.max(1)),
        }
    }

    /// Call `attempt` until it succeeds or the policy is exhausted
    ///
    /// Validation errors are reported to `on_invalid` and retried. Any
    /// other error, including one returned by `on_invalid`, aborts
    /// immediately. When attempts run out the last validation error is
    /// returned.
    pub fn run<T, F, E>(&self, mut attempt: F, mut on_invalid: E) -> LedgerResult<T>
    where
        F: FnMut() -> LedgerResult<T>,
        E: FnMut(&LedgerError) -> LedgerResult<()>,
    {
        let mut tries = 0u32;
        loop {
            tries += 1;
            match attempt() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => {
                    if self.max_attempts.is_some_and(|max| tries >= max) {
                        return Err(e);
                    }
                    on_invalid(&e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::bounded(3)
    }
}
