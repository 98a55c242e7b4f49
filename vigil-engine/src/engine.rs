use chrono::{DateTime, Utc};

use vigil_core::config::EngineConfig;
use vigil_core::errors::VigilResult;
use vigil_core::traits::{IConfidenceEngine, ZoneEvidence};
use vigil_core::zone::{ConfidenceFactors, ZoneConfidenceState};

use crate::composer;
use crate::trust;

/// The confidence engine: the composer plus its configuration.
///
/// Stateless apart from the config — safe to share across any number of
/// concurrent request handlers.
pub struct ConfidenceEngine {
    config: EngineConfig,
}

impl ConfidenceEngine {
    /// Engine with the reference configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Engine with custom thresholds.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Trust weight for a submitter's karma, to be fixed onto a new
    /// submission at creation time.
    pub fn trust_weight(&self, karma: i64) -> f64 {
        trust::weight(karma, &self.config.trust)
    }
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IConfidenceEngine for ConfidenceEngine {
    fn apply(
        &self,
        current: Option<&ZoneConfidenceState>,
        evidence: &ZoneEvidence<'_>,
    ) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)> {
        composer::compose(current, evidence, &self.config)
    }

    fn sweep(
        &self,
        current: &ZoneConfidenceState,
        now: DateTime<Utc>,
    ) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)> {
        composer::compose_sweep(current, now, &self.config)
    }

    fn evidence_window_hours(&self) -> u64 {
        self.config
            .hazard
            .window_hours
            .max(self.config.conflict.window_hours)
            .max(24)
    }

    fn hazard_window_hours(&self) -> u64 {
        self.config.hazard.window_hours
    }
}
