//! Reports for the ledger
//!
//! Aggregations computed over transactions read from the store.

pub mod range_summary;

pub use range_summary::{RangeQuery, RangeSummary};
