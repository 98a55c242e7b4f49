//! Query modules, one per concern.

pub mod submissions;
pub mod zone_state;

use chrono::{DateTime, Utc};

use vigil_core::errors::{StorageError, VigilError};

/// Parse an RFC 3339 timestamp read back from a row.
pub(crate) fn parse_ts(zone_id: &str, field: &str, raw: &str) -> Result<DateTime<Utc>, VigilError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::MalformedRow {
                zone_id: zone_id.to_string(),
                details: format!("{field}: {e}"),
            }
            .into()
        })
}
