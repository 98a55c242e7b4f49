use chrono::{DateTime, Duration, Utc};

use vigil_core::config::HazardConfig;

/// Result of one hazard aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardOutcome {
    pub active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    /// Flat penalty, non-zero only when the hazard opens or refreshes.
    pub penalty: f64,
}

impl HazardOutcome {
    fn inactive() -> Self {
        Self {
            active: false,
            expires_at: None,
            reason: None,
            penalty: 0.0,
        }
    }
}

/// Open, refresh, expire, or carry forward the zone's hazard.
///
/// - `report_count` at or above the threshold opens the hazard with a
///   time-boxed expiry and applies the penalty. Re-triggering while
///   already active refreshes the expiry (and penalizes again).
/// - An active hazard whose expiry has passed lapses naturally; the
///   clearing update itself carries no penalty.
/// - Otherwise the existing fields carry forward unchanged.
pub fn evaluate(
    report_count: u32,
    currently_active: bool,
    expires_at: Option<DateTime<Utc>>,
    reason: Option<&str>,
    now: DateTime<Utc>,
    config: &HazardConfig,
) -> HazardOutcome {
    if report_count >= config.activation_threshold {
        return HazardOutcome {
            active: true,
            expires_at: Some(now + Duration::days(config.active_days)),
            reason: Some(format!(
                "{report_count} hazard reports in {}h",
                config.window_hours
            )),
            penalty: config.penalty,
        };
    }

    if currently_active {
        match expires_at {
            Some(expiry) if expiry <= now => HazardOutcome::inactive(),
            _ => HazardOutcome {
                active: true,
                expires_at,
                reason: reason.map(str::to_string),
                penalty: 0.0,
            },
        }
    } else {
        HazardOutcome::inactive()
    }
}
