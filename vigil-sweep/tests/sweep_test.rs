use chrono::{Duration, Utc};

use vigil_core::config::EngineConfig;
use vigil_core::intel::{IntelSubmission, IntelType};
use vigil_core::traits::IZoneStore;
use vigil_core::zone::{ZoneConfidenceState, ZoneState};
use vigil_engine::ConfidenceEngine;
use vigil_storage::ZoneStore;
use vigil_sweep::DecaySweep;

fn make_submission(
    zone_id: &str,
    intel_type: IntelType,
    created_at: chrono::DateTime<Utc>,
) -> IntelSubmission {
    IntelSubmission::new(
        zone_id,
        format!("user-{}", uuid::Uuid::new_v4()),
        intel_type,
        serde_json::json!({}),
        1.0,
        created_at,
    )
}

// ── Batch behavior ───────────────────────────────────────────────────────

#[test]
fn sweep_decays_every_zone_and_resets_counters() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let then = Utc::now() - Duration::days(5);

    for zone in ["zone-a", "zone-b", "zone-c"] {
        let sub = make_submission(zone, IntelType::QuietConfirmed, then);
        store.record_submission(&engine, &sub, then).unwrap();
    }

    let sweep = DecaySweep::new(ConfidenceEngine::new());
    let now = Utc::now();
    let report = sweep.run(&store, now).unwrap();

    assert_eq!(report.zones_processed, 3);
    assert_eq!(report.zones_failed, 0);
    assert_eq!(report.hazards_cleared, 0);

    for zone in ["zone-a", "zone-b", "zone-c"] {
        let state = store.get_state(zone).unwrap().unwrap();
        assert_eq!(state.intel_count_24h, 0, "{zone} counter must reset");
        // 5 days since intel, 1 of grace: 8 points off the boosted 54.
        assert!((state.score - 46.0).abs() < 0.01, "{zone} score {}", state.score);
    }
    assert!((report.average_score - 46.0).abs() < 0.01);
}

#[test]
fn sweep_clears_hazards_whose_expiry_has_passed() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let then = Utc::now() - Duration::days(8);

    // Two hazard reports eight days ago opened a 7-day hazard.
    for _ in 0..2 {
        let sub = make_submission("zone-cliff", IntelType::HazardReport, then);
        store.record_submission(&engine, &sub, then).unwrap();
    }
    let before = store.get_state("zone-cliff").unwrap().unwrap();
    assert!(before.hazard_active);
    assert_eq!(before.state, ZoneState::Offline);

    let sweep = DecaySweep::new(ConfidenceEngine::new());
    let report = sweep.run(&store, Utc::now()).unwrap();
    assert_eq!(report.hazards_cleared, 1);

    let after = store.get_state("zone-cliff").unwrap().unwrap();
    assert!(!after.hazard_active, "expiry has passed, hazard must lapse");
    assert!(after.hazard_expires_at.is_none());
    assert_ne!(after.state, ZoneState::Offline);
}

#[test]
fn sweep_twice_in_succession_produces_identical_scores() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let then = Utc::now() - Duration::days(3);

    let sub = make_submission("zone-dunes", IntelType::Verification, then);
    store.record_submission(&engine, &sub, then).unwrap();

    let sweep = DecaySweep::new(ConfidenceEngine::new());
    let now = Utc::now();
    sweep.run(&store, now).unwrap();
    let first = store.get_state("zone-dunes").unwrap().unwrap();

    sweep.run(&store, now).unwrap();
    let second = store.get_state("zone-dunes").unwrap().unwrap();

    assert_eq!(first.score, second.score);
    assert_eq!(first.level, second.level);
    assert_eq!(first.state, second.state);
    assert_eq!(first.intel_count_24h, second.intel_count_24h);
}

#[test]
fn one_corrupt_zone_does_not_abort_the_sweep() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let then = Utc::now() - Duration::days(2);

    let sub = make_submission("zone-good", IntelType::QuietConfirmed, then);
    store.record_submission(&engine, &sub, then).unwrap();

    // A state row with a score outside the documented range: the engine
    // must reject it rather than coerce it.
    let mut corrupt = ZoneConfidenceState::initial("zone-corrupt", &EngineConfig::default(), then);
    corrupt.score = 400.0;
    store.upsert_state(&corrupt).unwrap();

    let sweep = DecaySweep::new(ConfidenceEngine::new());
    let report = sweep.run(&store, Utc::now()).unwrap();

    assert_eq!(report.zones_failed, 1);
    assert_eq!(report.zones_processed, 1);

    let good = store.get_state("zone-good").unwrap().unwrap();
    assert!(good.score < 54.0, "healthy zone still swept");
}
