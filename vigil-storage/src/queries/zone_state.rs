//! Get, upsert, and list zone confidence state rows.

use rusqlite::{params, Connection};

use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::zone::{ConfidenceLevel, ZoneConfidenceState, ZoneState};

use super::parse_ts;
use crate::to_storage_err;

const STATE_COLUMNS: &str = "zone_id, score, level, state, last_verified_at, last_intel_at, \
     verification_count, intel_count_24h, conflict_count, hazard_active, \
     hazard_expires_at, hazard_reason, anomaly_detected, anomaly_reason, updated_at";

/// Fetch one zone's state row, if it exists.
pub fn get_state(conn: &Connection, zone_id: &str) -> VigilResult<Option<ZoneConfidenceState>> {
    let sql = format!("SELECT {STATE_COLUMNS} FROM zone_confidence WHERE zone_id = ?1");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = stmt
        .query(params![zone_id])
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        Some(row) => Ok(Some(state_from_row(row)?)),
        None => Ok(None),
    }
}

/// Insert or fully replace a zone's state row.
pub fn upsert_state(conn: &Connection, state: &ZoneConfidenceState) -> VigilResult<()> {
    conn.execute(
        "INSERT INTO zone_confidence (
            zone_id, score, level, state, last_verified_at, last_intel_at,
            verification_count, intel_count_24h, conflict_count, hazard_active,
            hazard_expires_at, hazard_reason, anomaly_detected, anomaly_reason, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
        ON CONFLICT(zone_id) DO UPDATE SET
            score = excluded.score,
            level = excluded.level,
            state = excluded.state,
            last_verified_at = excluded.last_verified_at,
            last_intel_at = excluded.last_intel_at,
            verification_count = excluded.verification_count,
            intel_count_24h = excluded.intel_count_24h,
            conflict_count = excluded.conflict_count,
            hazard_active = excluded.hazard_active,
            hazard_expires_at = excluded.hazard_expires_at,
            hazard_reason = excluded.hazard_reason,
            anomaly_detected = excluded.anomaly_detected,
            anomaly_reason = excluded.anomaly_reason,
            updated_at = excluded.updated_at",
        params![
            state.zone_id,
            state.score,
            state.level.as_str(),
            state.state.as_str(),
            state.last_verified_at.map(|t| t.to_rfc3339()),
            state.last_intel_at.map(|t| t.to_rfc3339()),
            state.verification_count,
            state.intel_count_24h,
            state.conflict_count,
            state.hazard_active as i32,
            state.hazard_expires_at.map(|t| t.to_rfc3339()),
            state.hazard_reason,
            state.anomaly_detected as i32,
            state.anomaly_reason,
            state.updated_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All zone ids with a state row, for the daily sweep.
pub fn zone_ids(conn: &Connection) -> VigilResult<Vec<String>> {
    let mut stmt = conn
        .prepare_cached("SELECT zone_id FROM zone_confidence ORDER BY zone_id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn state_from_row(row: &rusqlite::Row<'_>) -> VigilResult<ZoneConfidenceState> {
    let zone_id: String = row.get(0).map_err(|e| to_storage_err(e.to_string()))?;

    let level_raw: String = row.get(2).map_err(|e| to_storage_err(e.to_string()))?;
    let level = ConfidenceLevel::parse(&level_raw).ok_or_else(|| StorageError::MalformedRow {
        zone_id: zone_id.clone(),
        details: format!("unknown level {level_raw:?}"),
    })?;

    let state_raw: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let state = ZoneState::parse(&state_raw).ok_or_else(|| StorageError::MalformedRow {
        zone_id: zone_id.clone(),
        details: format!("unknown state {state_raw:?}"),
    })?;

    let last_verified_raw: Option<String> = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let last_intel_raw: Option<String> = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    let hazard_expires_raw: Option<String> =
        row.get(10).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_raw: String = row.get(14).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(ZoneConfidenceState {
        score: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        level,
        state,
        last_verified_at: last_verified_raw
            .map(|raw| parse_ts(&zone_id, "last_verified_at", &raw))
            .transpose()?,
        last_intel_at: last_intel_raw
            .map(|raw| parse_ts(&zone_id, "last_intel_at", &raw))
            .transpose()?,
        verification_count: row.get(6).map_err(|e| to_storage_err(e.to_string()))?,
        intel_count_24h: row.get(7).map_err(|e| to_storage_err(e.to_string()))?,
        conflict_count: row.get(8).map_err(|e| to_storage_err(e.to_string()))?,
        hazard_active: row
            .get::<_, i32>(9)
            .map_err(|e| to_storage_err(e.to_string()))?
            != 0,
        hazard_expires_at: hazard_expires_raw
            .map(|raw| parse_ts(&zone_id, "hazard_expires_at", &raw))
            .transpose()?,
        hazard_reason: row.get(11).map_err(|e| to_storage_err(e.to_string()))?,
        anomaly_detected: row
            .get::<_, i32>(12)
            .map_err(|e| to_storage_err(e.to_string()))?
            != 0,
        anomaly_reason: row.get(13).map_err(|e| to_storage_err(e.to_string()))?,
        updated_at: parse_ts(&zone_id, "updated_at", &updated_raw)?,
        zone_id,
    })
}
