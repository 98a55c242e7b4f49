//! The confidence composer — orchestrates every factor into one update.
//!
//! ```text
//! final = clamp(base − timeDecay + intelBoost
//!               − conflictPenalty − hazardPenalty − anomalyPenalty,
//!               floor, ceiling)
//! ```
//!
//! Every factor is computed off the same pre-update base score, so a
//! single update cannot both decay and be boosted by the same submission
//! twice. The clamp at composition is the primary safety net: no sequence
//! of inputs can push a score outside the configured range.

use chrono::{DateTime, Utc};

use vigil_core::config::EngineConfig;
use vigil_core::errors::{EngineError, VigilResult};
use vigil_core::intel::{IntelSubmission, IntelType};
use vigil_core::traits::ZoneEvidence;
use vigil_core::zone::{ConfidenceFactors, ZoneConfidenceState};

use crate::classify;
use crate::factors::{anomaly, boost, conflict, decay, hazard};
use crate::factors::anomaly::AnomalyOutcome;

/// Apply one batch of evidence to a zone's state.
///
/// `current = None` triggers lazy default initialization. Returns the new
/// state plus the per-factor breakdown; persisting the state is the
/// caller's job.
pub fn compose(
    current: Option<&ZoneConfidenceState>,
    evidence: &ZoneEvidence<'_>,
    config: &EngineConfig,
) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)> {
    let mut state = match current {
        Some(existing) => {
            existing.validate(config)?;
            existing.clone()
        }
        None => ZoneConfidenceState::initial(evidence.zone_id, config, evidence.now),
    };

    if let Some(submission) = evidence.submission {
        submission.validate(&config.trust)?;
        if submission.zone_id != evidence.zone_id {
            return Err(EngineError::ZoneMismatch {
                zone_id: evidence.zone_id.to_string(),
                submission_id: submission.id.clone(),
                submission_zone: submission.zone_id.clone(),
            }
            .into());
        }
    }

    let base = state.score;
    let now = evidence.now;

    let time_decay = decay::calculate(
        base,
        state.last_intel_at,
        state.updated_at,
        now,
        &config.decay,
        &config.score,
    );

    let intel_boost = match evidence.submission {
        Some(submission) => {
            let raw = boost::calculate(
                submission.intel_type,
                submission.trust_weight,
                state.intel_count_24h,
                &config.boost,
                &config.trust,
            );
            let spent = daily_boost_spent(evidence.window_24h, &submission.id, config);
            raw.min((config.boost.max_per_day - spent).max(0.0))
        }
        None => 0.0,
    };

    let conflict_count = conflict::count(evidence.window_24h, now, &config.conflict);
    let conflict_penalty = conflict::penalty(conflict_count, &config.conflict);

    let hazard_outcome = hazard::evaluate(
        evidence.hazard_report_count,
        state.hazard_active,
        state.hazard_expires_at,
        state.hazard_reason.as_deref(),
        now,
        &config.hazard,
    );

    // Sticky anomaly: a cycle with a price observation overwrites the
    // flag; a cycle without one carries it forward unpenalized.
    let anomaly_outcome = match &evidence.price_observation {
        Some(observation) => anomaly::evaluate(observation, &config.anomaly),
        None => AnomalyOutcome {
            detected: state.anomaly_detected,
            reason: state.anomaly_reason.clone(),
            penalty: 0.0,
        },
    };

    let final_score = config.score.clamp(
        base - time_decay + intel_boost
            - conflict_penalty
            - hazard_outcome.penalty
            - anomaly_outcome.penalty,
    );

    let factors = ConfidenceFactors {
        base_score: base,
        time_decay,
        intel_boost,
        conflict_penalty,
        hazard_penalty: hazard_outcome.penalty,
        anomaly_penalty: anomaly_outcome.penalty,
        final_score,
    };

    if hazard_outcome.active && !state.hazard_active {
        tracing::info!(
            zone_id = %state.zone_id,
            reports = evidence.hazard_report_count,
            expires_at = ?hazard_outcome.expires_at,
            "hazard opened"
        );
    } else if !hazard_outcome.active && state.hazard_active {
        tracing::info!(zone_id = %state.zone_id, "hazard lapsed");
    }

    if let Some(submission) = evidence.submission {
        state.intel_count_24h = state.intel_count_24h.saturating_add(1);
        state.last_intel_at = Some(submission.created_at);
        if submission.intel_type == IntelType::Verification {
            state.verification_count = state.verification_count.saturating_add(1);
            state.last_verified_at = Some(submission.created_at);
        }
    }

    state.score = final_score;
    state.level = classify::level(final_score);
    state.conflict_count = conflict_count;
    state.hazard_active = hazard_outcome.active;
    state.hazard_expires_at = hazard_outcome.expires_at;
    state.hazard_reason = hazard_outcome.reason;
    state.anomaly_detected = anomaly_outcome.detected;
    state.anomaly_reason = anomaly_outcome.reason;
    state.state = classify::zone_state(
        final_score,
        state.hazard_active,
        state.anomaly_detected,
        config.score.floor,
    );
    state.updated_at = now;

    tracing::debug!(
        zone_id = %state.zone_id,
        base = factors.base_score,
        decay = factors.time_decay,
        boost = factors.intel_boost,
        conflict = factors.conflict_penalty,
        hazard = factors.hazard_penalty,
        anomaly = factors.anomaly_penalty,
        score = factors.final_score,
        level = %state.level,
        zone_state = %state.state,
        "confidence recomputed"
    );

    Ok((state, factors))
}

/// Daily-sweep recomputation: decay with no new evidence, natural hazard
/// expiry, reclassification, and the 24h counter reset.
///
/// Computed from state, not incrementally mutated in place, so running the
/// sweep twice in immediate succession yields the same output both times.
pub fn compose_sweep(
    current: &ZoneConfidenceState,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)> {
    current.validate(config)?;
    let mut state = current.clone();

    let base = state.score;
    let time_decay = decay::calculate(
        base,
        state.last_intel_at,
        state.updated_at,
        now,
        &config.decay,
        &config.score,
    );
    let final_score = config.score.clamp(base - time_decay);

    // Only the expiry branch can fire with zero reports.
    let hazard_outcome = hazard::evaluate(
        0,
        state.hazard_active,
        state.hazard_expires_at,
        state.hazard_reason.as_deref(),
        now,
        &config.hazard,
    );
    if !hazard_outcome.active && state.hazard_active {
        tracing::info!(zone_id = %state.zone_id, "hazard lapsed during sweep");
    }

    state.score = final_score;
    state.level = classify::level(final_score);
    state.hazard_active = hazard_outcome.active;
    state.hazard_expires_at = hazard_outcome.expires_at;
    state.hazard_reason = hazard_outcome.reason;
    state.intel_count_24h = 0;
    state.state = classify::zone_state(
        final_score,
        state.hazard_active,
        state.anomaly_detected,
        config.score.floor,
    );
    state.updated_at = now;

    let factors = ConfidenceFactors {
        base_score: base,
        time_decay,
        intel_boost: 0.0,
        conflict_penalty: 0.0,
        hazard_penalty: 0.0,
        anomaly_penalty: 0.0,
        final_score,
    };

    Ok((state, factors))
}

/// Boost already granted to earlier submissions in the 24h window,
/// re-priced in arrival order. Caps cumulative daily boost: the new
/// submission only receives whatever headroom remains of the per-day
/// budget.
fn daily_boost_spent(window: &[IntelSubmission], exclude_id: &str, config: &EngineConfig) -> f64 {
    let mut prior: Vec<&IntelSubmission> =
        window.iter().filter(|s| s.id != exclude_id).collect();
    prior.sort_by_key(|s| s.created_at);

    prior
        .iter()
        .enumerate()
        .map(|(position, s)| {
            boost::calculate(
                s.intel_type,
                s.trust_weight,
                position as u32,
                &config.boost,
                &config.trust,
            )
        })
        .sum()
}
