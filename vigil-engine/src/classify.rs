//! Pure classification of a composed score into level and state.

use vigil_core::zone::{ConfidenceLevel, ZoneState};

/// Confidence level from score alone.
pub fn level(score: f64) -> ConfidenceLevel {
    ConfidenceLevel::from_score(score)
}

/// Operational state from score and flags.
///
/// Hazard dominates everything: an active hazard forces OFFLINE regardless
/// of score. Below the floor or under an anomaly flag the zone is
/// DEGRADED. Level and state are independent outputs — a zone can be HIGH
/// numerically while DEGRADED operationally.
pub fn zone_state(score: f64, hazard_active: bool, anomaly_detected: bool, floor: f64) -> ZoneState {
    if hazard_active {
        ZoneState::Offline
    } else if score < floor {
        ZoneState::Degraded
    } else if anomaly_detected {
        ZoneState::Degraded
    } else {
        ZoneState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_forces_offline_regardless_of_score() {
        assert_eq!(zone_state(95.0, true, false, 20.0), ZoneState::Offline);
        assert_eq!(zone_state(20.0, true, true, 20.0), ZoneState::Offline);
    }

    #[test]
    fn anomaly_degrades_even_a_high_score() {
        assert_eq!(zone_state(92.0, false, true, 20.0), ZoneState::Degraded);
        assert_eq!(level(92.0), ConfidenceLevel::High);
    }

    #[test]
    fn healthy_zone_is_active() {
        assert_eq!(zone_state(50.0, false, false, 20.0), ZoneState::Active);
    }
}
