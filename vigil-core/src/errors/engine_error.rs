/// Malformed-input errors raised by the scoring engine.
///
/// These fail fast by design: a silently-coerced corrupt state would
/// propagate bad confidence to users. Sparse data (e.g. too few price
/// samples for an anomaly judgment) is NOT an error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown intel type: {value}")]
    UnknownIntelType { value: String },

    #[error("submission {submission_id}: trust weight {value} outside [{min}, {max}]")]
    TrustWeightOutOfRange {
        submission_id: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zone {zone_id}: {field} = {value} outside [{min}, {max}]")]
    StateFieldOutOfRange {
        zone_id: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zone {zone_id}: hazard_active set without hazard_expires_at")]
    HazardWithoutExpiry { zone_id: String },

    #[error("submission {submission_id} targets zone {submission_zone}, not zone {zone_id}")]
    ZoneMismatch {
        zone_id: String,
        submission_id: String,
        submission_zone: String,
    },
}
