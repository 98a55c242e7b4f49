//! Append and window-query intel submissions.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use vigil_core::constants::MAX_WINDOW_FETCH;
use vigil_core::errors::VigilResult;
use vigil_core::intel::{IntelSubmission, IntelType};
use vigil_core::zone::PriceBaseline;

use super::parse_ts;
use crate::to_storage_err;

/// Append one submission. Submissions are immutable; there is no update.
pub fn insert_submission(conn: &Connection, submission: &IntelSubmission) -> VigilResult<()> {
    let payload_json = serde_json::to_string(&submission.payload)?;
    conn.execute(
        "INSERT INTO intel_submissions (
            id, zone_id, submitter_id, intel_type, payload, trust_weight, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            submission.id,
            submission.zone_id,
            submission.submitter_id,
            submission.intel_type.as_str(),
            payload_json,
            submission.trust_weight,
            submission.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Submissions for a zone with `created_at >= since`, newest first.
pub fn submissions_since(
    conn: &Connection,
    zone_id: &str,
    since: DateTime<Utc>,
) -> VigilResult<Vec<IntelSubmission>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, zone_id, submitter_id, intel_type, payload, trust_weight, created_at
             FROM intel_submissions
             WHERE zone_id = ?1 AND created_at >= ?2
             ORDER BY created_at DESC
             LIMIT ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query(params![zone_id, since.to_rfc3339(), MAX_WINDOW_FETCH as i64])
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(|e| to_storage_err(e.to_string()))? {
        out.push(submission_from_row(row)?);
    }
    Ok(out)
}

/// HAZARD_REPORT count for a zone with `created_at >= since`.
pub fn hazard_report_count(
    conn: &Connection,
    zone_id: &str,
    since: DateTime<Utc>,
) -> VigilResult<u32> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT COUNT(*) FROM intel_submissions
             WHERE zone_id = ?1 AND intel_type = ?2 AND created_at >= ?3",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(
        params![
            zone_id,
            IntelType::HazardReport.as_str(),
            since.to_rfc3339()
        ],
        |row| row.get::<_, u32>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Running price average and sample count for one item in one zone,
/// over prior PRICE_SUBMISSION payloads. `None` when no samples exist.
pub fn price_baseline(
    conn: &Connection,
    zone_id: &str,
    item: &str,
) -> VigilResult<Option<PriceBaseline>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT AVG(CAST(json_extract(payload, '$.price') AS REAL)), COUNT(*)
             FROM intel_submissions
             WHERE zone_id = ?1
               AND intel_type = ?2
               AND json_extract(payload, '$.item') = ?3
               AND json_extract(payload, '$.price') IS NOT NULL",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let (average, sample_count): (Option<f64>, u32) = stmt
        .query_row(
            params![zone_id, IntelType::PriceSubmission.as_str(), item],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(average.map(|average| PriceBaseline {
        average,
        sample_count,
    }))
}

fn submission_from_row(row: &rusqlite::Row<'_>) -> VigilResult<IntelSubmission> {
    let zone_id: String = row.get(1).map_err(|e| to_storage_err(e.to_string()))?;
    let type_raw: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let payload_raw: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let created_raw: String = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;

    Ok(IntelSubmission {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        submitter_id: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        intel_type: IntelType::from_str(&type_raw)?,
        payload: serde_json::from_str(&payload_raw)?,
        trust_weight: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_ts(&zone_id, "created_at", &created_raw)?,
        zone_id,
    })
}
