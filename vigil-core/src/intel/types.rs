use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::EngineError;

/// The kind of crowd report a submission carries.
///
/// Serialized in SCREAMING_SNAKE_CASE to match the wire names used by the
/// submission pipeline and the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntelType {
    PriceSubmission,
    HassleReport,
    Construction,
    CrowdSurge,
    QuietConfirmed,
    HazardReport,
    Verification,
}

impl IntelType {
    /// All types, in no particular order.
    pub const ALL: [IntelType; 7] = [
        IntelType::PriceSubmission,
        IntelType::HassleReport,
        IntelType::Construction,
        IntelType::CrowdSurge,
        IntelType::QuietConfirmed,
        IntelType::HazardReport,
        IntelType::Verification,
    ];

    /// Built-in boost multiplier for this type.
    ///
    /// Hazard reports never boost confidence; they only ever penalize,
    /// which is handled by the hazard aggregator.
    pub fn base_multiplier(self) -> f64 {
        match self {
            IntelType::Verification => 1.5,
            IntelType::PriceSubmission => 1.0,
            IntelType::QuietConfirmed => 0.8,
            IntelType::CrowdSurge => 0.7,
            IntelType::HassleReport => 0.6,
            IntelType::Construction => 0.5,
            IntelType::HazardReport => 0.0,
        }
    }

    /// Wire name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            IntelType::PriceSubmission => "PRICE_SUBMISSION",
            IntelType::HassleReport => "HASSLE_REPORT",
            IntelType::Construction => "CONSTRUCTION",
            IntelType::CrowdSurge => "CROWD_SURGE",
            IntelType::QuietConfirmed => "QUIET_CONFIRMED",
            IntelType::HazardReport => "HAZARD_REPORT",
            IntelType::Verification => "VERIFICATION",
        }
    }
}

impl fmt::Display for IntelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntelType {
    type Err = EngineError;

    /// Parse a wire name. Unrecognized values fail fast rather than being
    /// coerced to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRICE_SUBMISSION" => Ok(IntelType::PriceSubmission),
            "HASSLE_REPORT" => Ok(IntelType::HassleReport),
            "CONSTRUCTION" => Ok(IntelType::Construction),
            "CROWD_SURGE" => Ok(IntelType::CrowdSurge),
            "QUIET_CONFIRMED" => Ok(IntelType::QuietConfirmed),
            "HAZARD_REPORT" => Ok(IntelType::HazardReport),
            "VERIFICATION" => Ok(IntelType::Verification),
            other => Err(EngineError::UnknownIntelType {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for ty in IntelType::ALL {
            assert_eq!(IntelType::from_str(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        let err = IntelType::from_str("SELFIE_SPOT").unwrap_err();
        assert!(matches!(err, EngineError::UnknownIntelType { .. }));
    }

    #[test]
    fn hazard_reports_never_boost() {
        assert_eq!(IntelType::HazardReport.base_multiplier(), 0.0);
    }
}
