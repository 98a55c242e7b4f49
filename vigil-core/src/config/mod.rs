//! Engine configuration.
//!
//! Every threshold the engine consults lives here and is passed explicitly
//! into the scoring functions, so the engine stays a pure function of its
//! full input set. `Default` yields the reference behavior.

pub mod defaults;

mod detection_config;
mod scoring_config;
mod trust_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{VigilError, VigilResult};

pub use detection_config::{AnomalyConfig, ConflictConfig, ConflictPair, HazardConfig};
pub use scoring_config::{BoostConfig, DecayConfig, ScoreConfig};
pub use trust_config::{TrustBand, TrustConfig};

/// Full engine configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub score: ScoreConfig,
    pub trust: TrustConfig,
    pub decay: DecayConfig,
    pub boost: BoostConfig,
    pub conflict: ConflictConfig,
    pub hazard: HazardConfig,
    pub anomaly: AnomalyConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing sections fall back to
    /// the reference defaults.
    pub fn from_toml_file(path: &Path) -> VigilResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| VigilError::Config(format!("read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| VigilError::Config(format!("parse {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::IntelType;

    #[test]
    fn default_config_matches_reference_thresholds() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.score.floor, 20.0);
        assert_eq!(cfg.score.ceiling, 100.0);
        assert_eq!(cfg.score.initial, 50.0);
        assert_eq!(cfg.trust.min_weight, 0.3);
        assert_eq!(cfg.trust.max_weight, 1.5);
        assert_eq!(cfg.decay.grace_hours, 24);
        assert_eq!(cfg.decay.rate_per_day, 2.0);
        assert_eq!(cfg.boost.max_per_submission, 15.0);
        assert_eq!(cfg.conflict.pairs.len(), 2);
        assert_eq!(cfg.conflict.penalty_threshold, 3);
        assert_eq!(cfg.hazard.activation_threshold, 2);
        assert_eq!(cfg.anomaly.min_samples, 3);
    }

    #[test]
    fn boost_multiplier_override_wins() {
        let mut cfg = BoostConfig::default();
        assert_eq!(cfg.multiplier(IntelType::Verification), 1.5);
        cfg.multiplier_overrides.insert(IntelType::Verification, 2.0);
        assert_eq!(cfg.multiplier(IntelType::Verification), 2.0);
    }

    #[test]
    fn toml_roundtrip_preserves_sections() {
        let cfg = EngineConfig::default();
        let raw = toml::to_string(&cfg).unwrap();
        let parsed: EngineConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.score.floor, cfg.score.floor);
        assert_eq!(parsed.conflict.pairs, cfg.conflict.pairs);
        assert_eq!(parsed.hazard.active_days, cfg.hazard.active_days);
    }
}
