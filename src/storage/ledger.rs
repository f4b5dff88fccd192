//! Ledger store backed by a CSV file
//!
//! Append-only persistence of transactions and range queries over them.
//! The whole file is read on every query; nothing is cached between calls.

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;

use crate::config::{StoreConfig, COLUMNS};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, LedgerRow};
use crate::reports::{RangeQuery, RangeSummary};

use super::file_io::{self, FileState};

/// One row as written to disk
#[derive(Debug, Serialize)]
struct StoredRecord<'a> {
    date: &'a str,
    amount: f64,
    category: &'a str,
    description: &'a str,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    amount: usize,
    category: usize,
    description: usize,
}

impl Default for ColumnIndex {
    /// The columns in the order they are written
    fn default() -> Self {
        Self {
            date: 0,
            amount: 1,
            category: 2,
            description: 3,
        }
    }
}

impl ColumnIndex {
    /// Locate columns by name, falling back to file order for any that are absent
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str, fallback: usize| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .unwrap_or(fallback)
        };
        let positional = Self::default();
        Self {
            date: find(COLUMNS[0], positional.date),
            amount: find(COLUMNS[1], positional.amount),
            category: find(COLUMNS[2], positional.category),
            description: find(COLUMNS[3], positional.description),
        }
    }
}

/// The transaction store
#[derive(Debug, Clone)]
pub struct LedgerStore {
    config: StoreConfig,
}

impl LedgerStore {
    /// Create a store for the given configuration; touches nothing on disk
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Ensure the ledger file exists with its header row
    ///
    /// An existing file is left untouched whatever it contains.
    pub fn initialize(&self) -> LedgerResult<()> {
        if file_io::create_with_header(self.config.path(), &COLUMNS)? {
            log::info!("Created ledger at {}", self.config.path().display());
        }
        Ok(())
    }

    /// Append one transaction
    ///
    /// The category is trimmed and title-cased and the description trimmed.
    /// The date is written as given; callers validate it beforehand.
    pub fn append(
        &self,
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
    ) -> LedgerResult<()> {
        let path = self.config.path();
        let category = Category::normalize(category);
        let record = StoredRecord {
            date: date.trim(),
            amount,
            category: category.as_str(),
            description: description.trim(),
        };

        let state = file_io::inspect(path)?;
        if state == FileState::Blank {
            file_io::truncate(path)?;
        }
        let header = state.needs_header().then_some(&COLUMNS[..]);
        let repair_newline = state == FileState::Content { trailing_newline: false };

        file_io::append_record(path, &record, header, repair_newline)?;
        log::debug!(
            "Appended {} {} on {} to {}",
            record.category,
            record.amount,
            record.date,
            path.display()
        );
        Ok(())
    }

    /// Read every row of the table in file order
    ///
    /// A missing or blank file yields no rows. Records the CSV reader
    /// cannot decode are skipped with a warning. An undecodable header
    /// row falls back to the written column order.
    pub fn read_all(&self) -> LedgerResult<Vec<LedgerRow>> {
        let path = self.config.path();
        if file_io::inspect(path)? == FileState::Blank {
            return Ok(Vec::new());
        }
        let Some(mut reader) = file_io::open_reader(path)? else {
            return Ok(Vec::new());
        };

        let columns = match reader.headers() {
            Ok(headers) => ColumnIndex::from_headers(headers),
            Err(e) => {
                log::warn!(
                    "Unreadable header in {}, assuming column order {}: {}",
                    path.display(),
                    COLUMNS.join(","),
                    e
                );
                ColumnIndex::default()
            }
        };

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Skipping unreadable row {}: {}", index + 1, e);
                    continue;
                }
            };
            let field = |i: usize| record.get(i).unwrap_or("");
            rows.push(LedgerRow::parse(
                field(columns.date),
                field(columns.amount),
                field(columns.category),
                field(columns.description),
                &self.config.date_format,
            ));
        }

        Ok(rows)
    }

    /// Transactions dated within `[start, end]` plus their totals
    ///
    /// Both bounds must be in the configured date pattern.
    pub fn query_range(&self, start: &str, end: &str) -> LedgerResult<RangeQuery> {
        let start_date = self.parse_bound(start)?;
        let end_date = self.parse_bound(end)?;

        let rows = self.read_all()?;
        if rows.is_empty() {
            log::info!("No transactions in {}", self.config.path().display());
            return Ok(RangeQuery::NoTransactions {
                start_date,
                end_date,
            });
        }

        let total_rows = rows.len();
        let matched: Vec<_> = rows
            .into_iter()
            .filter_map(|row| {
                if row.date.is_none() {
                    log::debug!("Skipping row with unreadable date '{}'", row.date_text);
                }
                row.into_transaction()
            })
            .filter(|txn| txn.in_range(start_date, end_date))
            .collect();

        if matched.is_empty() {
            log::info!(
                "None of {} rows fall between {} and {}",
                total_rows,
                start_date,
                end_date
            );
            return Ok(RangeQuery::NoMatches {
                start_date,
                end_date,
            });
        }

        Ok(RangeQuery::Found(RangeSummary::from_transactions(
            start_date, end_date, matched,
        )))
    }

    fn parse_bound(&self, text: &str) -> LedgerResult<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), &self.config.date_format).map_err(|_| {
            LedgerError::Validation(format!(
                "Invalid date '{}', expected pattern {}",
                text, self.config.date_format
            ))
        })
    }
}
