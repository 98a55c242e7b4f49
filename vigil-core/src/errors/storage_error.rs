/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("zone {zone_id}: update lock poisoned")]
    ZoneLockPoisoned { zone_id: String },

    #[error("zone {zone_id}: malformed state row: {details}")]
    MalformedRow { zone_id: String, details: String },
}
