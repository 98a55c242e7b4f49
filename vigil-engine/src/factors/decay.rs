use chrono::{DateTime, Duration, Utc};

use vigil_core::config::{DecayConfig, ScoreConfig};
use vigil_core::constants::SECS_PER_DAY;

/// Time decay amount to subtract from the current score.
///
/// Decay accrues at `rate_per_day` over the decayable span since the
/// state's last update, where the span excludes the grace period after
/// the most recent intel:
///
/// - Within the grace period: 0 — freshly reported zones do not decay.
/// - Past it: `rate × fractional days` from the later of (grace end, last
///   update) to `now`, capped at `score − floor` so decay alone never
///   crosses the floor.
/// - No intel has ever arrived: no grace; the zone erodes continuously
///   from its last update (the flat daily rate under a daily sweep).
///
/// Measuring from the last update keeps recomputation idempotent — the
/// erosion already applied by a previous update is never applied twice —
/// and produces the sawtooth history: flat during grace, then linear
/// decline asymptoting at the floor, never a hard reset.
pub fn calculate(
    score: f64,
    last_intel_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
    decay: &DecayConfig,
    score_cfg: &ScoreConfig,
) -> f64 {
    let headroom = (score - score_cfg.floor).max(0.0);
    if headroom <= 0.0 {
        return 0.0;
    }

    let accrual_start = match last_intel_at {
        Some(last) => {
            let grace_end = last + Duration::hours(decay.grace_hours as i64);
            if now < grace_end {
                return 0.0;
            }
            grace_end.max(updated_at)
        }
        None => updated_at,
    };

    let span_secs = (now - accrual_start).num_seconds().max(0) as f64;
    ((span_secs / SECS_PER_DAY) * decay.rate_per_day).min(headroom)
}
