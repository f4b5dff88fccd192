//! Transaction model
//!
//! A [`LedgerRow`] is one record exactly as far as it could be understood
//! when read back from disk. A [`Transaction`] is a row whose date parsed,
//! which is what range queries deal in.
//!
//! Stored values are parsed best-effort, per field:
//! - `date`: parsed with the configured pattern; failure leaves it `None`
//!   and the row never matches a range.
//! - `amount`: thousands separators and surrounding whitespace are
//!   stripped; anything that still isn't a finite number is `None` and
//!   contributes nothing to totals.
//! - `category`: trimmed and title-cased.
//! - `description`: trimmed.

use chrono::NaiveDate;

use super::category::Category;

/// A row of the ledger file after best-effort parsing
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    /// The `date` column as stored
    pub date_text: String,
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub category: Category,
    pub description: String,
}

impl LedgerRow {
    /// Parse the four raw columns of a stored row
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
        date_format: &str,
    ) -> Self {
        Self {
            date_text: date.trim().to_string(),
            date: parse_stored_date(date, date_format),
            amount: parse_stored_amount(amount),
            category: Category::normalize(category),
            description: description.trim().to_string(),
        }
    }

    /// Convert to a [`Transaction`], dropping rows without a usable date
    pub fn into_transaction(self) -> Option<Transaction> {
        let date = self.date?;
        Some(Transaction {
            date,
            amount: self.amount,
            category: self.category,
            description: self.description,
        })
    }
}

/// A dated ledger entry
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    /// `None` when the stored amount was not numeric
    pub amount: Option<f64>,
    pub category: Category,
    pub description: String,
}

impl Transaction {
    /// The amount as it counts toward totals
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// Check whether the date lies within `[start, end]`
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}

/// Parse a stored date with the given strftime pattern
pub fn parse_stored_date(text: &str, date_format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), date_format).ok()
}

/// Parse a stored amount, tolerating `1,250.50`-style separators
pub fn parse_stored_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%d-%m-%Y";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_well_formed_row() {
        let row = LedgerRow::parse("01-01-2024", "100.0", "income", " salary ", FORMAT);
        assert_eq!(row.date, Some(date(2024, 1, 1)));
        assert_eq!(row.amount, Some(100.0));
        assert_eq!(row.category, Category::Income);
        assert_eq!(row.description, "salary");
    }

    #[test]
    fn test_bad_date_is_none() {
        let row = LedgerRow::parse("2024/01/01", "5", "Expense", "", FORMAT);
        assert_eq!(row.date, None);
        assert_eq!(row.date_text, "2024/01/01");
        assert!(row.into_transaction().is_none());

        assert_eq!(parse_stored_date("31-02-2024", FORMAT), None);
    }

    #[test]
    fn test_amount_parsing() {
        assert_eq!(parse_stored_amount("1,250.50"), Some(1250.5));
        assert_eq!(parse_stored_amount("  42 "), Some(42.0));
        assert_eq!(parse_stored_amount("abc"), None);
        assert_eq!(parse_stored_amount(""), None);
        assert_eq!(parse_stored_amount("NaN"), None);
        assert_eq!(parse_stored_amount("inf"), None);
    }

    #[test]
    fn test_in_range_is_inclusive() {
        let txn = Transaction {
            date: date(2024, 1, 15),
            amount: Some(10.0),
            category: Category::Expense,
            description: String::new(),
        };
        assert!(txn.in_range(date(2024, 1, 15), date(2024, 1, 15)));
        assert!(txn.in_range(date(2024, 1, 1), date(2024, 1, 31)));
        assert!(!txn.in_range(date(2024, 1, 16), date(2024, 1, 31)));
    }

    #[test]
    fn test_missing_amount_counts_as_zero() {
        let txn = LedgerRow::parse("02-01-2024", "n/a", "Expense", "", FORMAT)
            .into_transaction()
            .unwrap();
        assert_eq!(txn.amount, None);
        assert_eq!(txn.amount_or_zero(), 0.0);
    }
}
