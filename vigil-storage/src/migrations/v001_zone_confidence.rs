//! v001: zone_confidence.

use rusqlite::Connection;

use vigil_core::errors::VigilResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> VigilResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS zone_confidence (
            zone_id            TEXT PRIMARY KEY,
            score              REAL NOT NULL,
            level              TEXT NOT NULL,
            state              TEXT NOT NULL,
            last_verified_at   TEXT,
            last_intel_at      TEXT,
            verification_count INTEGER NOT NULL DEFAULT 0,
            intel_count_24h    INTEGER NOT NULL DEFAULT 0,
            conflict_count     INTEGER NOT NULL DEFAULT 0,
            hazard_active      INTEGER NOT NULL DEFAULT 0,
            hazard_expires_at  TEXT,
            hazard_reason      TEXT,
            anomaly_detected   INTEGER NOT NULL DEFAULT 0,
            anomaly_reason     TEXT,
            updated_at         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_zone_confidence_state ON zone_confidence(state);
        CREATE INDEX IF NOT EXISTS idx_zone_confidence_hazard
            ON zone_confidence(hazard_active, hazard_expires_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
