use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::types::IntelType;
use crate::config::TrustConfig;
use crate::errors::EngineError;

/// One crowd report about a zone.
///
/// Immutable once created; the engine only ever reads submissions. The
/// trust weight is fixed at submission time from the submitter's karma, so
/// later reputation changes never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntelSubmission {
    /// UUID v4 identifier.
    pub id: String,
    /// Zone this report is about.
    pub zone_id: String,
    /// Who submitted it.
    pub submitter_id: String,
    /// What kind of report this is.
    pub intel_type: IntelType,
    /// Opaque type-specific payload. The engine never interprets this;
    /// the store extracts price fields from it for the anomaly baseline.
    pub payload: serde_json::Value,
    /// Trust weight in [0.3, 1.5], fixed at creation.
    pub trust_weight: f64,
    pub created_at: DateTime<Utc>,
}

impl IntelSubmission {
    /// Build a new submission with a fresh UUID.
    pub fn new(
        zone_id: impl Into<String>,
        submitter_id: impl Into<String>,
        intel_type: IntelType,
        payload: serde_json::Value,
        trust_weight: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            zone_id: zone_id.into(),
            submitter_id: submitter_id.into(),
            intel_type,
            payload,
            trust_weight,
            created_at,
        }
    }

    /// Fail fast on a trust weight outside the configured range.
    pub fn validate(&self, trust: &TrustConfig) -> Result<(), EngineError> {
        if !self.trust_weight.is_finite() || !trust.in_range(self.trust_weight) {
            return Err(EngineError::TrustWeightOutOfRange {
                submission_id: self.id.clone(),
                value: self.trust_weight,
                min: trust.min_weight,
                max: trust.max_weight,
            });
        }
        Ok(())
    }
}

/// Identity equality: two submissions are equal if they have the same ID.
impl PartialEq for IntelSubmission {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_trust_weight_is_rejected() {
        let trust = TrustConfig::default();
        let mut sub = IntelSubmission::new(
            "zone-1",
            "user-1",
            IntelType::Verification,
            serde_json::json!({}),
            1.2,
            Utc::now(),
        );
        assert!(sub.validate(&trust).is_ok());

        sub.trust_weight = 2.4;
        assert!(matches!(
            sub.validate(&trust),
            Err(EngineError::TrustWeightOutOfRange { .. })
        ));

        sub.trust_weight = f64::NAN;
        assert!(sub.validate(&trust).is_err());
    }
}
