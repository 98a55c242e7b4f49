use vigil_core::config::{BoostConfig, TrustConfig};
use vigil_core::intel::IntelType;

/// Diminishing-returns factor for the Nth submission of the day.
///
/// `max(floor, 1 − recent_count × step)`: each additional submission in
/// the same 24h window is worth less, floored so a flood of reports still
/// counts for something. Blunts brigading by a small number of accounts.
pub fn diminishing_factor(recent_count: u32, config: &BoostConfig) -> f64 {
    (1.0 - recent_count as f64 * config.diminishing_step).max(config.diminishing_floor)
}

/// Positive score contribution of one new submission.
///
/// `base × type multiplier × clamped trust weight × diminishing`, capped
/// at the per-submission maximum. Hazard reports carry a zero multiplier —
/// they never boost confidence.
pub fn calculate(
    intel_type: IntelType,
    trust_weight: f64,
    recent_count: u32,
    boost: &BoostConfig,
    trust: &TrustConfig,
) -> f64 {
    let base = boost.base_points * boost.multiplier(intel_type);
    let weighted = base * trust.clamp(trust_weight);
    (weighted * diminishing_factor(recent_count, boost)).min(boost.max_per_submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diminishing_floors_and_never_goes_negative() {
        let cfg = BoostConfig::default();
        assert_eq!(diminishing_factor(0, &cfg), 1.0);
        assert_eq!(diminishing_factor(2, &cfg), 0.7);
        assert_eq!(diminishing_factor(10, &cfg), 0.2);
        assert_eq!(diminishing_factor(1000, &cfg), 0.2);
    }

    #[test]
    fn verification_from_trusted_user_is_worth_nine_points() {
        let boost = BoostConfig::default();
        let trust = TrustConfig::default();
        // 5 × 1.5 × 1.2 × 1.0
        let points = calculate(IntelType::Verification, 1.2, 0, &boost, &trust);
        assert!((points - 9.0).abs() < 1e-9);
    }

    #[test]
    fn hazard_reports_contribute_nothing() {
        let boost = BoostConfig::default();
        let trust = TrustConfig::default();
        assert_eq!(
            calculate(IntelType::HazardReport, 1.5, 0, &boost, &trust),
            0.0
        );
    }

    #[test]
    fn out_of_range_weight_is_clamped_before_scaling() {
        let boost = BoostConfig::default();
        let trust = TrustConfig::default();
        let capped = calculate(IntelType::Verification, 99.0, 0, &boost, &trust);
        let max = calculate(IntelType::Verification, 1.5, 0, &boost, &trust);
        assert_eq!(capped, max);
    }
}
