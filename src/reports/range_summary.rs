//! Range Summary
//!
//! Aggregates the transactions of a date range into income, expense and
//! net savings totals.

use chrono::NaiveDate;

use crate::models::Transaction;

/// Transactions of an inclusive date range plus their totals
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSummary {
    /// First day of the range
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive)
    pub end_date: NaiveDate,
    /// Matching transactions in file order
    pub transactions: Vec<Transaction>,
    /// Sum of `Income` amounts
    pub total_income: f64,
    /// Sum of `Expense` amounts
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub net_savings: f64,
}

impl RangeSummary {
    /// Total up the given transactions
    ///
    /// Rows with a missing amount or an unknown category add nothing.
    pub fn from_transactions(
        start_date: NaiveDate,
        end_date: NaiveDate,
        transactions: Vec<Transaction>,
    ) -> Self {
        let (total_income, total_expense) =
            transactions
                .iter()
                .fold((0.0, 0.0), |(income, expense), txn| {
                    if txn.category.is_income() {
                        (income + txn.amount_or_zero(), expense)
                    } else if txn.category.is_expense() {
                        (income, expense + txn.amount_or_zero())
                    } else {
                        (income, expense)
                    }
                });

        Self {
            start_date,
            end_date,
            transactions,
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
        }
    }

    /// A summary with no transactions and all totals zero
    pub fn empty(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::from_transactions(start_date, end_date, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of matching transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

/// Outcome of a range query
#[derive(Debug, Clone, PartialEq)]
pub enum RangeQuery {
    /// The ledger file is missing or holds no rows
    NoTransactions {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// The ledger has rows, but none dated inside the range
    NoMatches {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    /// At least one row matched
    Found(RangeSummary),
}

impl RangeQuery {
    /// The matching transactions (empty for the informational outcomes)
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            Self::Found(summary) => &summary.transactions,
            _ => &[],
        }
    }

    pub fn total_income(&self) -> f64 {
        self.as_summary().map_or(0.0, |s| s.total_income)
    }

    pub fn total_expense(&self) -> f64 {
        self.as_summary().map_or(0.0, |s| s.total_expense)
    }

    pub fn net_savings(&self) -> f64 {
        self.as_summary().map_or(0.0, |s| s.net_savings)
    }

    pub fn as_summary(&self) -> Option<&RangeSummary> {
        match self {
            Self::Found(summary) => Some(summary),
            _ => None,
        }
    }

    /// The summary for this outcome; all zero when nothing matched
    pub fn summary(&self) -> RangeSummary {
        match self {
            Self::NoTransactions {
                start_date,
                end_date,
            }
            | Self::NoMatches {
                start_date,
                end_date,
            } => RangeSummary::empty(*start_date, *end_date),
            Self::Found(summary) => summary.clone(),
        }
    }

    /// Human-readable explanation for the informational outcomes
    pub fn message(&self, date_format: &str) -> Option<String> {
        match self {
            Self::NoTransactions { .. } => Some("No transactions available.".to_string()),
            Self::NoMatches {
                start_date,
                end_date,
            } => Some(format!(
                "No transactions found between {} and {}.",
                start_date.format(date_format),
                end_date.format(date_format)
            )),
            Self::Found(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(day: u32, amount: Option<f64>, category: Category) -> Transaction {
        Transaction {
            date: date(2024, 1, day),
            amount,
            category,
            description: String::new(),
        }
    }

    #[test]
    fn test_totals() {
        let summary = RangeSummary::from_transactions(
            date(2024, 1, 1),
            date(2024, 1, 31),
            vec![
                txn(1, Some(100.0), Category::Income),
                txn(2, Some(40.0), Category::Expense),
                txn(3, Some(25.5), Category::Expense),
                txn(4, Some(10.0), Category::Income),
            ],
        );

        assert_eq!(summary.len(), 4);
        assert_eq!(summary.total_income, 110.0);
        assert_eq!(summary.total_expense, 65.5);
        assert_eq!(summary.net_savings, 44.5);
    }

    #[test]
    fn test_missing_amounts_and_unknown_categories_are_ignored() {
        let summary = RangeSummary::from_transactions(
            date(2024, 1, 1),
            date(2024, 1, 31),
            vec![
                txn(1, None, Category::Income),
                txn(2, Some(500.0), Category::Other("Transfer".into())),
                txn(3, Some(12.0), Category::Expense),
            ],
        );

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expense, 12.0);
        assert_eq!(summary.net_savings, -12.0);
        assert_eq!(summary.len(), 3);
    }

    #[test]
    fn test_net_equals_income_minus_expense() {
        let summary = RangeSummary::from_transactions(
            date(2024, 1, 1),
            date(2024, 1, 31),
            vec![
                txn(1, Some(0.1), Category::Income),
                txn(2, Some(0.2), Category::Income),
                txn(3, Some(0.3), Category::Expense),
            ],
        );
        assert_eq!(
            summary.total_income - summary.total_expense,
            summary.net_savings
        );
    }

    #[test]
    fn test_empty_outcomes_report_zero() {
        let none = RangeQuery::NoTransactions {
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 5),
        };
        assert!(none.transactions().is_empty());
        assert_eq!(none.total_income(), 0.0);
        assert_eq!(none.total_expense(), 0.0);
        assert_eq!(none.net_savings(), 0.0);
        assert_eq!(
            none.message("%d-%m-%Y").as_deref(),
            Some("No transactions available.")
        );

        let no_matches = RangeQuery::NoMatches {
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 5),
        };
        assert!(no_matches.as_summary().is_none());
        assert_eq!(
            no_matches.message("%d-%m-%Y").as_deref(),
            Some("No transactions found between 01-03-2024 and 05-03-2024.")
        );

        let empty = RangeSummary::empty(date(2024, 3, 1), date(2024, 3, 5));
        assert!(empty.is_empty());
        assert_eq!(empty.net_savings, 0.0);
    }

    #[test]
    fn test_summary_of_empty_outcomes_is_zero() {
        let bounds = (date(2024, 3, 1), date(2024, 3, 5));
        let outcomes = [
            RangeQuery::NoTransactions {
                start_date: bounds.0,
                end_date: bounds.1,
            },
            RangeQuery::NoMatches {
                start_date: bounds.0,
                end_date: bounds.1,
            },
        ];

        for outcome in &outcomes {
            let summary = outcome.summary();
            assert_eq!(summary, RangeSummary::empty(bounds.0, bounds.1));
            assert_eq!(summary.start_date, bounds.0);
            assert_eq!(summary.end_date, bounds.1);
            assert!(summary.is_empty());
            assert_eq!(summary.total_income, 0.0);
            assert_eq!(summary.total_expense, 0.0);
            assert_eq!(summary.net_savings, 0.0);
        }
    }

    #[test]
    fn test_summary_of_found_outcome() {
        let found = RangeSummary::from_transactions(
            date(2024, 1, 1),
            date(2024, 1, 31),
            vec![txn(1, Some(100.0), Category::Income)],
        );
        let outcome = RangeQuery::Found(found.clone());
        assert_eq!(outcome.summary(), found);
    }
}
