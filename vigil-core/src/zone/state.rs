use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::level::{ConfidenceLevel, ZoneState};
use crate::config::EngineConfig;
use crate::errors::EngineError;

/// The persisted confidence aggregate for one zone.
///
/// Exactly one record exists per zone, created lazily on first submission
/// with a neutral default. It is exclusively owned and mutated by the
/// confidence composer and the daily decay sweep; nothing else writes it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ZoneConfidenceState {
    pub zone_id: String,
    /// Confidence score, always within the configured floor/ceiling.
    pub score: f64,
    /// Discrete bucket derived purely from `score`.
    pub level: ConfidenceLevel,
    /// Operational status combining score with hazard/anomaly flags.
    pub state: ZoneState,
    /// Most recent VERIFICATION submission, if any.
    pub last_verified_at: Option<DateTime<Utc>>,
    /// Most recent submission of any type, if any.
    pub last_intel_at: Option<DateTime<Utc>>,
    /// Total VERIFICATION submissions ever processed.
    pub verification_count: u64,
    /// Submissions since the last daily sweep reset. An approximation of a
    /// rolling 24h window; reset to zero once per day by the sweep.
    pub intel_count_24h: u32,
    /// Distinct contradictory pairs observed in the most recent window scan.
    pub conflict_count: u32,
    pub hazard_active: bool,
    pub hazard_expires_at: Option<DateTime<Utc>>,
    /// Free-text reason recorded when the hazard opened.
    pub hazard_reason: Option<String>,
    pub anomaly_detected: bool,
    /// Reason code, currently only `PRICE_DEVIATION`.
    pub anomaly_reason: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ZoneConfidenceState {
    /// Neutral default state for a zone seen for the first time: initial
    /// score, MEDIUM, ACTIVE. The level is pinned rather than derived —
    /// a brand-new zone is presented as middling until evidence moves it,
    /// and the first composed update re-derives it from the score anyway.
    pub fn initial(zone_id: impl Into<String>, config: &EngineConfig, now: DateTime<Utc>) -> Self {
        let score = config.score.initial;
        Self {
            zone_id: zone_id.into(),
            score,
            level: ConfidenceLevel::Medium,
            state: ZoneState::Active,
            last_verified_at: None,
            last_intel_at: None,
            verification_count: 0,
            intel_count_24h: 0,
            conflict_count: 0,
            hazard_active: false,
            hazard_expires_at: None,
            hazard_reason: None,
            anomaly_detected: false,
            anomaly_reason: None,
            updated_at: now,
        }
    }

    /// Fail fast on fields outside documented ranges.
    ///
    /// A silently-clamped corrupt state would propagate bad confidence to
    /// users, so out-of-range values are errors, never coerced.
    pub fn validate(&self, config: &EngineConfig) -> Result<(), EngineError> {
        if !self.score.is_finite() || !config.score.in_range(self.score) {
            return Err(EngineError::StateFieldOutOfRange {
                zone_id: self.zone_id.clone(),
                field: "score",
                value: self.score,
                min: config.score.floor,
                max: config.score.ceiling,
            });
        }
        if self.hazard_active && self.hazard_expires_at.is_none() {
            return Err(EngineError::HazardWithoutExpiry {
                zone_id: self.zone_id.clone(),
            });
        }
        Ok(())
    }
}

/// Identity equality: two states are equal if they describe the same zone.
impl PartialEq for ZoneConfidenceState {
    fn eq(&self, other: &Self) -> bool {
        self.zone_id == other.zone_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_neutral() {
        let cfg = EngineConfig::default();
        let state = ZoneConfidenceState::initial("zone-1", &cfg, Utc::now());
        assert_eq!(state.score, 50.0);
        assert_eq!(state.level, ConfidenceLevel::Medium);
        assert_eq!(state.state, ZoneState::Active);
        assert!(state.last_intel_at.is_none());
        assert!(state.validate(&cfg).is_ok());
    }

    #[test]
    fn out_of_range_score_fails_validation() {
        let cfg = EngineConfig::default();
        let mut state = ZoneConfidenceState::initial("zone-1", &cfg, Utc::now());
        state.score = 140.0;
        assert!(matches!(
            state.validate(&cfg),
            Err(EngineError::StateFieldOutOfRange { field: "score", .. })
        ));
    }

    #[test]
    fn hazard_without_expiry_fails_validation() {
        let cfg = EngineConfig::default();
        let mut state = ZoneConfidenceState::initial("zone-1", &cfg, Utc::now());
        state.hazard_active = true;
        assert!(matches!(
            state.validate(&cfg),
            Err(EngineError::HazardWithoutExpiry { .. })
        ));
    }
}
