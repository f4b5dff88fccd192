//! Storage initialization
//!
//! Handles first-run setup: directories, settings and an empty ledger.

use crate::config::{LedgerPaths, Settings, StoreConfig};
use crate::error::LedgerError;

use super::ledger::LedgerStore;

/// Initialize storage for a fresh installation
///
/// Creates the data directory, persists the settings if none are saved yet
/// and creates the header-only ledger file. Safe to run repeatedly.
pub fn initialize_storage(
    paths: &LedgerPaths,
    settings: &Settings,
) -> Result<LedgerStore, LedgerError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    let store = LedgerStore::new(StoreConfig::from_settings(paths, settings));
    store.initialize()?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        assert!(!paths.ledger_file().exists());

        let store = initialize_storage(&paths, &settings).unwrap();

        assert!(paths.ledger_file().exists());
        assert!(paths.settings_file().exists());
        assert_eq!(store.config().path(), paths.ledger_file());
        assert_eq!(
            std::fs::read_to_string(paths.ledger_file()).unwrap(),
            "date,amount,category,description\n"
        );
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let store = initialize_storage(&paths, &settings).unwrap();
        store.append("01-01-2024", 100.0, "Income", "salary").unwrap();

        let mut changed = Settings::default();
        changed.currency_symbol = "$".into();
        initialize_storage(&paths, &changed).unwrap();

        assert_eq!(store.read_all().unwrap().len(), 1);
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "₹");
    }
}
