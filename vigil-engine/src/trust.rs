use vigil_core::config::TrustConfig;

/// Map a submitter's karma to a bounded trust weight.
///
/// Monotonic step function over the configured bands, clamped to
/// `[min_weight, max_weight]`. The weight is fixed onto the submission at
/// creation time and never recomputed retroactively, so a user's later
/// reputation changes do not rewrite history.
pub fn weight(karma: i64, config: &TrustConfig) -> f64 {
    for band in &config.bands {
        if karma < band.below {
            return band.weight.clamp(config.min_weight, config.max_weight);
        }
    }
    config.max_weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bands() {
        let cfg = TrustConfig::default();
        assert_eq!(weight(-500, &cfg), 0.3);
        assert_eq!(weight(-1, &cfg), 0.3);
        assert_eq!(weight(0, &cfg), 0.5);
        assert_eq!(weight(49, &cfg), 0.5);
        assert_eq!(weight(50, &cfg), 0.8);
        assert_eq!(weight(199, &cfg), 0.8);
        assert_eq!(weight(200, &cfg), 1.0);
        assert_eq!(weight(499, &cfg), 1.0);
        assert_eq!(weight(500, &cfg), 1.2);
        assert_eq!(weight(600, &cfg), 1.2);
        assert_eq!(weight(999, &cfg), 1.2);
        assert_eq!(weight(1000, &cfg), 1.5);
        assert_eq!(weight(1_000_000, &cfg), 1.5);
    }
}
