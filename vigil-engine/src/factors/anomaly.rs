use vigil_core::config::AnomalyConfig;
use vigil_core::constants::ANOMALY_REASON_PRICE_DEVIATION;
use vigil_core::zone::PriceObservation;

/// Result of one anomaly judgment.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyOutcome {
    pub detected: bool,
    pub reason: Option<String>,
    pub penalty: f64,
}

impl AnomalyOutcome {
    pub fn clear() -> Self {
        Self {
            detected: false,
            reason: None,
            penalty: 0.0,
        }
    }
}

/// Judge a submitted price against the zone's running baseline.
///
/// Fewer than `min_samples` baseline samples is not an error; it is a
/// defined no-anomaly outcome — under-confidence in sparse data is
/// preferred over false positives.
pub fn evaluate(observation: &PriceObservation, config: &AnomalyConfig) -> AnomalyOutcome {
    if observation.sample_count < config.min_samples {
        return AnomalyOutcome::clear();
    }
    if !(observation.baseline_avg > 0.0) || !observation.submitted.is_finite() {
        return AnomalyOutcome::clear();
    }

    let deviation = (observation.submitted - observation.baseline_avg).abs() / observation.baseline_avg;
    if deviation > config.deviation_threshold {
        AnomalyOutcome {
            detected: true,
            reason: Some(ANOMALY_REASON_PRICE_DEVIATION.to_string()),
            penalty: config.penalty,
        }
    } else {
        AnomalyOutcome::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::zone::PriceBaseline;

    fn obs(submitted: f64, average: f64, samples: u32) -> PriceObservation {
        PriceObservation::new(
            submitted,
            PriceBaseline {
                average,
                sample_count: samples,
            },
        )
    }

    #[test]
    fn deviation_threshold_is_strict() {
        let cfg = AnomalyConfig::default();
        assert!(evaluate(&obs(151.0, 100.0, 3), &cfg).detected);
        assert!(!evaluate(&obs(149.0, 100.0, 3), &cfg).detected);
        // Exactly 50% is not an anomaly — the threshold is strictly greater-than.
        assert!(!evaluate(&obs(150.0, 100.0, 3), &cfg).detected);
        // Undercutting counts the same as overshooting.
        assert!(evaluate(&obs(49.0, 100.0, 3), &cfg).detected);
    }

    #[test]
    fn sparse_baseline_never_flags() {
        let cfg = AnomalyConfig::default();
        assert!(!evaluate(&obs(1000.0, 100.0, 2), &cfg).detected);
        assert!(!evaluate(&obs(1000.0, 100.0, 0), &cfg).detected);
    }

    #[test]
    fn detection_carries_reason_code_and_penalty() {
        let cfg = AnomalyConfig::default();
        let outcome = evaluate(&obs(200.0, 100.0, 5), &cfg);
        assert!(outcome.detected);
        assert_eq!(outcome.reason.as_deref(), Some("PRICE_DEVIATION"));
        assert_eq!(outcome.penalty, 10.0);
    }
}
