use chrono::{DateTime, Utc};

use crate::errors::VigilResult;
use crate::intel::IntelSubmission;
use crate::zone::{PriceBaseline, ZoneConfidenceState};

/// Persistence contract for zone state and submissions.
///
/// Implementations must serialize read-modify-write cycles per zone id;
/// updates to different zones proceed fully in parallel.
pub trait IZoneStore: Send + Sync {
    // --- Zone state ---
    fn get_state(&self, zone_id: &str) -> VigilResult<Option<ZoneConfidenceState>>;
    fn upsert_state(&self, state: &ZoneConfidenceState) -> VigilResult<()>;
    fn zone_ids(&self) -> VigilResult<Vec<String>>;

    // --- Submissions ---
    fn insert_submission(&self, submission: &IntelSubmission) -> VigilResult<()>;
    /// Submissions for a zone with `created_at >= since`, newest first.
    fn submissions_since(
        &self,
        zone_id: &str,
        since: DateTime<Utc>,
    ) -> VigilResult<Vec<IntelSubmission>>;
    /// HAZARD_REPORT count for a zone with `created_at >= since`.
    fn hazard_report_count(&self, zone_id: &str, since: DateTime<Utc>) -> VigilResult<u32>;
    /// Running price average and sample count for one item in one zone.
    /// `None` when no prior samples exist.
    fn price_baseline(&self, zone_id: &str, item: &str) -> VigilResult<Option<PriceBaseline>>;
}
