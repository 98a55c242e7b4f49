use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use vigil_core::config::ConflictConfig;
use vigil_core::intel::IntelSubmission;

/// Count distinct contradictory type pairs observed in the conflict window.
///
/// Per pair, not per submission: a pair contributes 1 when both of its
/// types appear at least once inside the window.
pub fn count(window: &[IntelSubmission], now: DateTime<Utc>, config: &ConflictConfig) -> u32 {
    let cutoff = now - Duration::hours(config.window_hours as i64);
    let present: HashSet<_> = window
        .iter()
        .filter(|s| s.created_at >= cutoff)
        .map(|s| s.intel_type)
        .collect();

    config
        .pairs
        .iter()
        .filter(|p| present.contains(&p.first) && present.contains(&p.second))
        .count() as u32
}

/// Flat penalty once the distinct-pair count reaches the threshold.
///
/// With the two default pairs the threshold of 3 cannot be reached; the
/// headroom is deliberate, armed by configuring more pairs.
pub fn penalty(conflict_count: u32, config: &ConflictConfig) -> f64 {
    if conflict_count >= config.penalty_threshold {
        config.penalty
    } else {
        0.0
    }
}
