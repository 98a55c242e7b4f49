//! Versioned schema migrations driven by `PRAGMA user_version`.

mod v001_zone_confidence;
mod v002_intel_submissions;

use rusqlite::Connection;

use vigil_core::errors::{StorageError, VigilResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> VigilResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_zone_confidence::migrate),
    (2, v002_intel_submissions::migrate),
];

/// Apply every migration above the database's current version, bumping
/// `user_version` as each one lands.
pub fn run_migrations(conn: &Connection) -> VigilResult<()> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}
