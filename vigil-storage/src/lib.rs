//! # vigil-storage
//!
//! SQLite persistence for the Vigil zone-confidence system: connection
//! pool (single writer + read pool, WAL), versioned migrations, query
//! modules, and the [`ZoneStore`] that serializes updates per zone.

pub mod migrations;
pub mod pool;
pub mod queries;
pub mod store;

pub use store::ZoneStore;

use vigil_core::errors::{StorageError, VigilError};

/// Shorthand for wrapping a low-level SQLite failure.
pub(crate) fn to_storage_err(message: impl Into<String>) -> VigilError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
