use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discrete confidence bucket, derived purely from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    Degraded,
    Unknown,
}

impl ConfidenceLevel {
    /// Scores at or above this are HIGH.
    pub const HIGH: f64 = 80.0;
    /// Scores at or above this are MEDIUM.
    pub const MEDIUM: f64 = 60.0;
    /// Scores at or above this are LOW.
    pub const LOW: f64 = 40.0;
    /// Scores at or above this are DEGRADED; anything below is UNKNOWN.
    pub const DEGRADED: f64 = 20.0;

    /// Pure step function over the fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH {
            ConfidenceLevel::High
        } else if score >= Self::MEDIUM {
            ConfidenceLevel::Medium
        } else if score >= Self::LOW {
            ConfidenceLevel::Low
        } else if score >= Self::DEGRADED {
            ConfidenceLevel::Degraded
        } else {
            ConfidenceLevel::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Low => "LOW",
            ConfidenceLevel::Degraded => "DEGRADED",
            ConfidenceLevel::Unknown => "UNKNOWN",
        }
    }

    /// Parse a stored level name. `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HIGH" => Some(ConfidenceLevel::High),
            "MEDIUM" => Some(ConfidenceLevel::Medium),
            "LOW" => Some(ConfidenceLevel::Low),
            "DEGRADED" => Some(ConfidenceLevel::Degraded),
            "UNKNOWN" => Some(ConfidenceLevel::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status of a zone. Independent of the level: a zone can sit
/// at a HIGH score and still be DEGRADED by an anomaly flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneState {
    Active,
    Degraded,
    Offline,
    Unknown,
}

impl ZoneState {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneState::Active => "ACTIVE",
            ZoneState::Degraded => "DEGRADED",
            ZoneState::Offline => "OFFLINE",
            ZoneState::Unknown => "UNKNOWN",
        }
    }

    /// Parse a stored state name. `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(ZoneState::Active),
            "DEGRADED" => Some(ZoneState::Degraded),
            "OFFLINE" => Some(ZoneState::Offline),
            "UNKNOWN" => Some(ZoneState::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for ZoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
