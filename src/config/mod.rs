//! Configuration module for the ledger
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - The explicit store configuration handed to the storage layer

pub mod paths;
pub mod settings;
pub mod store;

pub use paths::LedgerPaths;
pub use settings::Settings;
pub use store::{StoreConfig, COLUMNS};
