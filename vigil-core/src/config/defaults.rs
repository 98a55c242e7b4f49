//! Default threshold values for the reference scoring behavior.

/// Lowest score a zone can hold. Decay alone never pushes below this.
pub const DEFAULT_SCORE_FLOOR: f64 = 20.0;

/// Highest score a zone can hold.
pub const DEFAULT_SCORE_CEILING: f64 = 100.0;

/// Neutral score assigned when a zone state is first created.
pub const DEFAULT_SCORE_INITIAL: f64 = 50.0;

/// Lowest trust weight a submitter can carry.
pub const DEFAULT_MIN_TRUST_WEIGHT: f64 = 0.3;

/// Highest trust weight a submitter can carry.
pub const DEFAULT_MAX_TRUST_WEIGHT: f64 = 1.5;

/// Hours after fresh intel during which no decay is applied.
pub const DEFAULT_DECAY_GRACE_HOURS: u64 = 24;

/// Points of score eroded per day past the grace period.
pub const DEFAULT_DECAY_RATE_PER_DAY: f64 = 2.0;

/// Base points for an intel boost before type/trust/diminishing scaling.
pub const DEFAULT_BOOST_BASE_POINTS: f64 = 5.0;

/// Cap on the boost from a single submission.
pub const DEFAULT_BOOST_MAX_PER_SUBMISSION: f64 = 15.0;

/// Cap on cumulative boost within one 24h window.
pub const DEFAULT_BOOST_MAX_PER_DAY: f64 = 30.0;

/// How much each additional same-day submission is discounted.
pub const DEFAULT_BOOST_DIMINISHING_STEP: f64 = 0.15;

/// Floor on the diminishing factor.
pub const DEFAULT_BOOST_DIMINISHING_FLOOR: f64 = 0.2;

/// Trailing window scanned for contradictory report pairs.
pub const DEFAULT_CONFLICT_WINDOW_HOURS: u64 = 6;

/// Distinct contradictory pairs required before the penalty fires.
pub const DEFAULT_CONFLICT_PENALTY_THRESHOLD: u32 = 3;

/// Flat penalty applied once the conflict threshold is reached.
pub const DEFAULT_CONFLICT_PENALTY: f64 = 15.0;

/// Trailing window scanned for hazard reports.
pub const DEFAULT_HAZARD_WINDOW_HOURS: u64 = 24;

/// Hazard reports within the window required to open a hazard.
pub const DEFAULT_HAZARD_ACTIVATION_THRESHOLD: u32 = 2;

/// How long an opened hazard stays active without re-triggering.
pub const DEFAULT_HAZARD_ACTIVE_DAYS: i64 = 7;

/// Flat penalty applied when a hazard opens or refreshes.
pub const DEFAULT_HAZARD_PENALTY: f64 = 30.0;

/// Price samples required before an anomaly judgment is made.
pub const DEFAULT_ANOMALY_MIN_SAMPLES: u32 = 3;

/// Relative deviation from the baseline average that flags an anomaly.
pub const DEFAULT_ANOMALY_DEVIATION_THRESHOLD: f64 = 0.5;

/// Flat penalty applied when an anomaly is detected.
pub const DEFAULT_ANOMALY_PENALTY: f64 = 10.0;
