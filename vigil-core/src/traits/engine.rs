use chrono::{DateTime, Utc};

use crate::errors::VigilResult;
use crate::intel::IntelSubmission;
use crate::zone::{ConfidenceFactors, PriceObservation, ZoneConfidenceState};

/// Everything the composer needs to recompute one zone's confidence.
///
/// Pure data: the engine receives `now` explicitly and keeps no hidden
/// clock-dependent state, so two observers composing from the same
/// evidence always agree.
#[derive(Debug, Clone, Copy)]
pub struct ZoneEvidence<'a> {
    pub zone_id: &'a str,
    pub now: DateTime<Utc>,
    /// The new submission being applied, if any. Decay-only recomputation
    /// passes `None`.
    pub submission: Option<&'a IntelSubmission>,
    /// Submissions for the zone in the trailing 24h window, newest first.
    /// The conflict detector narrows this to its own 6h window.
    pub window_24h: &'a [IntelSubmission],
    /// HAZARD_REPORT count for the zone in the trailing 24h window,
    /// including the new submission if it is one.
    pub hazard_report_count: u32,
    /// Derived price signal, present only when applying a price submission
    /// with an established baseline to compare against.
    pub price_observation: Option<PriceObservation>,
}

/// The confidence engine contract: pure recomputation, no I/O.
pub trait IConfidenceEngine: Send + Sync {
    /// Apply evidence to a zone's current state (or none, triggering
    /// default initialization) and return the new state plus the factor
    /// breakdown.
    fn apply(
        &self,
        current: Option<&ZoneConfidenceState>,
        evidence: &ZoneEvidence<'_>,
    ) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)>;

    /// Daily-sweep recomputation: decay, hazard expiry, reclassification,
    /// and the 24h counter reset, with no new evidence.
    fn sweep(
        &self,
        current: &ZoneConfidenceState,
        now: DateTime<Utc>,
    ) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)>;

    /// Hours of trailing submissions the composer wants fetched — the
    /// widest of its evidence windows. Callers assembling [`ZoneEvidence`]
    /// use this to size the fetch.
    fn evidence_window_hours(&self) -> u64 {
        24
    }

    /// Hours of the hazard-report counting window.
    fn hazard_window_hours(&self) -> u64 {
        24
    }
}
