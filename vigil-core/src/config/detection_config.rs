use serde::{Deserialize, Serialize};

use super::defaults;
use crate::intel::IntelType;

/// A pair of report types that contradict each other when both appear
/// in the same trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    pub first: IntelType,
    pub second: IntelType,
}

/// Conflict detection configuration.
///
/// The penalty threshold is deliberately above what the two default pairs
/// can produce; it arms automatically as more pairs are configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictConfig {
    pub window_hours: u64,
    pub penalty_threshold: u32,
    pub penalty: f64,
    pub pairs: Vec<ConflictPair>,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            window_hours: defaults::DEFAULT_CONFLICT_WINDOW_HOURS,
            penalty_threshold: defaults::DEFAULT_CONFLICT_PENALTY_THRESHOLD,
            penalty: defaults::DEFAULT_CONFLICT_PENALTY,
            pairs: vec![
                ConflictPair {
                    first: IntelType::QuietConfirmed,
                    second: IntelType::CrowdSurge,
                },
                ConflictPair {
                    first: IntelType::QuietConfirmed,
                    second: IntelType::HassleReport,
                },
            ],
        }
    }
}

/// Hazard aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardConfig {
    pub window_hours: u64,
    /// Reports within the window required to open a hazard.
    pub activation_threshold: u32,
    /// Days an opened hazard stays active without re-triggering.
    pub active_days: i64,
    pub penalty: f64,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            window_hours: defaults::DEFAULT_HAZARD_WINDOW_HOURS,
            activation_threshold: defaults::DEFAULT_HAZARD_ACTIVATION_THRESHOLD,
            active_days: defaults::DEFAULT_HAZARD_ACTIVE_DAYS,
            penalty: defaults::DEFAULT_HAZARD_PENALTY,
        }
    }
}

/// Price anomaly detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Baseline samples required before any judgment is made.
    pub min_samples: u32,
    /// Relative deviation from the baseline average that flags an anomaly.
    pub deviation_threshold: f64,
    pub penalty: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::DEFAULT_ANOMALY_MIN_SAMPLES,
            deviation_threshold: defaults::DEFAULT_ANOMALY_DEVIATION_THRESHOLD,
            penalty: defaults::DEFAULT_ANOMALY_PENALTY,
        }
    }
}
