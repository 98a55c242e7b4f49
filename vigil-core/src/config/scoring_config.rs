use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::intel::IntelType;

/// Score range and initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Minimum score a zone can decay to.
    pub floor: f64,
    /// Maximum score a zone can hold.
    pub ceiling: f64,
    /// Score assigned on lazy state creation.
    pub initial: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            floor: defaults::DEFAULT_SCORE_FLOOR,
            ceiling: defaults::DEFAULT_SCORE_CEILING,
            initial: defaults::DEFAULT_SCORE_INITIAL,
        }
    }
}

impl ScoreConfig {
    /// Clamp a composed score into the configured range.
    pub fn clamp(&self, score: f64) -> f64 {
        score.clamp(self.floor, self.ceiling)
    }

    /// Whether a stored score falls inside the configured range.
    pub fn in_range(&self, score: f64) -> bool {
        (self.floor..=self.ceiling).contains(&score)
    }
}

/// Time decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Hours after fresh intel during which no decay applies.
    pub grace_hours: u64,
    /// Points eroded per day past the grace period.
    pub rate_per_day: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            grace_hours: defaults::DEFAULT_DECAY_GRACE_HOURS,
            rate_per_day: defaults::DEFAULT_DECAY_RATE_PER_DAY,
        }
    }
}

/// Intel boost subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    /// Base points before type/trust/diminishing scaling.
    pub base_points: f64,
    /// Cap on a single submission's boost.
    pub max_per_submission: f64,
    /// Cap on cumulative boost within one 24h window.
    pub max_per_day: f64,
    /// Discount per additional same-day submission.
    pub diminishing_step: f64,
    /// Floor on the diminishing factor.
    pub diminishing_floor: f64,
    /// Per-type multiplier overrides. Types not listed here use
    /// [`IntelType::base_multiplier`].
    pub multiplier_overrides: HashMap<IntelType, f64>,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            base_points: defaults::DEFAULT_BOOST_BASE_POINTS,
            max_per_submission: defaults::DEFAULT_BOOST_MAX_PER_SUBMISSION,
            max_per_day: defaults::DEFAULT_BOOST_MAX_PER_DAY,
            diminishing_step: defaults::DEFAULT_BOOST_DIMINISHING_STEP,
            diminishing_floor: defaults::DEFAULT_BOOST_DIMINISHING_FLOOR,
            multiplier_overrides: HashMap::new(),
        }
    }
}

impl BoostConfig {
    /// Effective type multiplier: override if present, built-in default otherwise.
    pub fn multiplier(&self, intel_type: IntelType) -> f64 {
        self.multiplier_overrides
            .get(&intel_type)
            .copied()
            .unwrap_or_else(|| intel_type.base_multiplier())
    }
}
