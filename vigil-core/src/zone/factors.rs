use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Breakdown of one confidence update, factor by factor.
///
/// Transient: exists to make a single update auditable and testable.
/// Callers may log it; it is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceFactors {
    pub base_score: f64,
    pub time_decay: f64,
    pub intel_boost: f64,
    pub conflict_penalty: f64,
    pub hazard_penalty: f64,
    pub anomaly_penalty: f64,
    pub final_score: f64,
}

/// Running price baseline for one item in one zone, derived by the store
/// from prior price submissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBaseline {
    pub average: f64,
    pub sample_count: u32,
}

/// The derived anomaly signal handed to the composer alongside a price
/// submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// The price the new submission claims.
    pub submitted: f64,
    /// Running average over prior samples for the same item.
    pub baseline_avg: f64,
    /// How many samples back the average.
    pub sample_count: u32,
}

impl PriceObservation {
    pub fn new(submitted: f64, baseline: PriceBaseline) -> Self {
        Self {
            submitted,
            baseline_avg: baseline.average,
            sample_count: baseline.sample_count,
        }
    }
}
