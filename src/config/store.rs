//! Store configuration
//!
//! The explicit set of knobs a [`LedgerStore`](crate::storage::LedgerStore)
//! is constructed with.

use std::path::{Path, PathBuf};

use super::paths::LedgerPaths;
use super::settings::{Settings, DEFAULT_DATE_FORMAT};

/// Column names of the transaction table, in file order
pub static COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Where the transaction table lives and how its dates are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the CSV file
    pub path: PathBuf,
    /// strftime pattern of the `date` column
    pub date_format: String,
}

impl StoreConfig {
    /// Configuration for a ledger at `path` using the default date pattern
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Build the configuration from resolved paths and user settings
    pub fn from_settings(paths: &LedgerPaths, settings: &Settings) -> Self {
        Self {
            path: settings.resolve_ledger_file(paths),
            date_format: settings.date_format.clone(),
        }
    }

    /// Override the date pattern
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_uses_default_format() {
        let config = StoreConfig::new("ledger.csv");
        assert_eq!(config.path(), Path::new("ledger.csv"));
        assert_eq!(config.date_format, "%d-%m-%Y");
    }

    #[test]
    fn test_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.date_format = "%Y-%m-%d".to_string();

        let config = StoreConfig::from_settings(&paths, &settings);
        assert_eq!(config.path, paths.ledger_file());
        assert_eq!(config.date_format, "%Y-%m-%d");
    }
}
