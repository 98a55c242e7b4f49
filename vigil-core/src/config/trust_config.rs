use serde::{Deserialize, Serialize};

use super::defaults;

/// One band of the karma → trust weight step function.
/// A submitter with karma strictly below `below` (and not matched by an
/// earlier band) receives `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustBand {
    pub below: i64,
    pub weight: f64,
}

/// Trust weight subsystem configuration.
///
/// Bands must be ordered by ascending `below`; karma at or above the last
/// band's bound receives `max_weight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub min_weight: f64,
    pub max_weight: f64,
    pub bands: Vec<TrustBand>,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            min_weight: defaults::DEFAULT_MIN_TRUST_WEIGHT,
            max_weight: defaults::DEFAULT_MAX_TRUST_WEIGHT,
            bands: vec![
                TrustBand { below: 0, weight: 0.3 },
                TrustBand { below: 50, weight: 0.5 },
                TrustBand { below: 200, weight: 0.8 },
                TrustBand { below: 500, weight: 1.0 },
                TrustBand { below: 1000, weight: 1.2 },
            ],
        }
    }
}

impl TrustConfig {
    /// Clamp a stored trust weight into the configured range.
    pub fn clamp(&self, weight: f64) -> f64 {
        weight.clamp(self.min_weight, self.max_weight)
    }

    /// Whether a stored trust weight falls inside the configured range.
    pub fn in_range(&self, weight: f64) -> bool {
        (self.min_weight..=self.max_weight).contains(&weight)
    }
}
