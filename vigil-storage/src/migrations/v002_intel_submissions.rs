//! v002: intel_submissions.

use rusqlite::Connection;

use vigil_core::errors::VigilResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VigilResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS intel_submissions (
            id           TEXT PRIMARY KEY,
            zone_id      TEXT NOT NULL,
            submitter_id TEXT NOT NULL,
            intel_type   TEXT NOT NULL,
            payload      TEXT NOT NULL DEFAULT '{}',
            trust_weight REAL NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_intel_zone_time
            ON intel_submissions(zone_id, created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_intel_zone_type_time
            ON intel_submissions(zone_id, intel_type, created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
