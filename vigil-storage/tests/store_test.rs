use std::sync::Arc;

use chrono::{Duration, Utc};

use vigil_core::intel::{IntelSubmission, IntelType};
use vigil_core::traits::IZoneStore;
use vigil_core::zone::{ConfidenceLevel, ZoneState};
use vigil_engine::ConfidenceEngine;
use vigil_storage::ZoneStore;

fn make_submission(
    zone_id: &str,
    intel_type: IntelType,
    trust_weight: f64,
    payload: serde_json::Value,
    created_at: chrono::DateTime<Utc>,
) -> IntelSubmission {
    IntelSubmission::new(
        zone_id,
        format!("user-{}", uuid::Uuid::new_v4()),
        intel_type,
        payload,
        trust_weight,
        created_at,
    )
}

// ── State round-trip ─────────────────────────────────────────────────────

#[test]
fn first_submission_creates_and_persists_state() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let now = Utc::now();

    let sub = make_submission("zone-souk", IntelType::Verification, 1.2, serde_json::json!({}), now);
    let (state, factors) = store.record_submission(&engine, &sub, now).unwrap();

    assert!((state.score - 59.0).abs() < 1e-9);
    assert!((factors.intel_boost - 9.0).abs() < 1e-9);

    let fetched = store.get_state("zone-souk").unwrap().expect("state row");
    assert_eq!(fetched.zone_id, "zone-souk");
    assert!((fetched.score - 59.0).abs() < 1e-9);
    assert_eq!(fetched.level, ConfidenceLevel::Medium);
    assert_eq!(fetched.state, ZoneState::Active);
    assert_eq!(fetched.verification_count, 1);
    assert_eq!(fetched.intel_count_24h, 1);
    assert_eq!(
        fetched.last_verified_at.map(|t| t.timestamp()),
        Some(sub.created_at.timestamp())
    );
    assert!(!fetched.hazard_active);
    assert!(fetched.hazard_expires_at.is_none());
}

#[test]
fn window_queries_are_ordered_newest_first() {
    let store = ZoneStore::open_in_memory().unwrap();
    let now = Utc::now();

    for hours_ago in [5, 1, 3] {
        let sub = make_submission(
            "zone-kasbah",
            IntelType::PriceSubmission,
            1.0,
            serde_json::json!({}),
            now - Duration::hours(hours_ago),
        );
        store.insert_submission(&sub).unwrap();
    }
    // A submission outside the window never shows up.
    let old = make_submission(
        "zone-kasbah",
        IntelType::PriceSubmission,
        1.0,
        serde_json::json!({}),
        now - Duration::hours(30),
    );
    store.insert_submission(&old).unwrap();

    let window = store
        .submissions_since("zone-kasbah", now - Duration::hours(24))
        .unwrap();
    assert_eq!(window.len(), 3);
    assert!(window.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

// ── Hazard flow through the store ────────────────────────────────────────

#[test]
fn second_hazard_report_takes_the_zone_offline() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let now = Utc::now();

    let first = make_submission(
        "zone-port",
        IntelType::HazardReport,
        1.0,
        serde_json::json!({"note": "pickpockets"}),
        now - Duration::hours(2),
    );
    let (after_first, _) = store.record_submission(&engine, &first, now - Duration::hours(2)).unwrap();
    assert!(!after_first.hazard_active, "one report must not activate");

    let second = make_submission(
        "zone-port",
        IntelType::HazardReport,
        1.0,
        serde_json::json!({"note": "still bad"}),
        now,
    );
    let (after_second, factors) = store.record_submission(&engine, &second, now).unwrap();

    assert!(after_second.hazard_active);
    assert_eq!(factors.hazard_penalty, 30.0);
    assert_eq!(after_second.state, ZoneState::Offline);
    assert!(after_second.hazard_reason.as_deref().unwrap().contains("2 hazard reports"));
}

// ── Price baseline and anomaly flow ──────────────────────────────────────

#[test]
fn price_baseline_builds_from_prior_samples_only() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let now = Utc::now();

    for (i, price) in [100.0, 102.0, 98.0].iter().enumerate() {
        let sub = make_submission(
            "zone-bazaar",
            IntelType::PriceSubmission,
            1.0,
            serde_json::json!({"item": "mint-tea", "price": price}),
            now - Duration::hours(10 - i as i64),
        );
        store.record_submission(&engine, &sub, sub.created_at).unwrap();
    }

    let baseline = store
        .price_baseline("zone-bazaar", "mint-tea")
        .unwrap()
        .expect("baseline after three samples");
    assert_eq!(baseline.sample_count, 3);
    assert!((baseline.average - 100.0).abs() < 1e-9);

    // 160 vs avg 100 is a 60% deviation over a 3-sample baseline.
    let outlier = make_submission(
        "zone-bazaar",
        IntelType::PriceSubmission,
        1.0,
        serde_json::json!({"item": "mint-tea", "price": 160.0}),
        now,
    );
    let (state, factors) = store.record_submission(&engine, &outlier, now).unwrap();
    assert!(state.anomaly_detected);
    assert_eq!(state.anomaly_reason.as_deref(), Some("PRICE_DEVIATION"));
    assert_eq!(factors.anomaly_penalty, 10.0);
    assert_eq!(state.state, ZoneState::Degraded);

    // Other items never pollute the baseline.
    assert!(store.price_baseline("zone-bazaar", "taxi-ride").unwrap().is_none());
}

#[test]
fn two_samples_are_not_enough_for_an_anomaly_judgment() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let now = Utc::now();

    for price in [100.0, 100.0] {
        let sub = make_submission(
            "zone-square",
            IntelType::PriceSubmission,
            1.0,
            serde_json::json!({"item": "water", "price": price}),
            now - Duration::hours(5),
        );
        store.record_submission(&engine, &sub, sub.created_at).unwrap();
    }

    let outlier = make_submission(
        "zone-square",
        IntelType::PriceSubmission,
        1.0,
        serde_json::json!({"item": "water", "price": 500.0}),
        now,
    );
    let (state, _) = store.record_submission(&engine, &outlier, now).unwrap();
    assert!(!state.anomaly_detected, "2-sample baseline must not flag");
}

// ── Sweep through the store ──────────────────────────────────────────────

#[test]
fn sweep_zone_decays_and_resets_the_daily_counter() {
    let store = ZoneStore::open_in_memory().unwrap();
    let engine = ConfidenceEngine::new();
    let then = Utc::now() - Duration::days(3);

    let sub = make_submission("zone-hill", IntelType::QuietConfirmed, 1.0, serde_json::json!({}), then);
    let (state, _) = store.record_submission(&engine, &sub, then).unwrap();
    assert_eq!(state.intel_count_24h, 1);

    let now = Utc::now();
    let (swept, factors) = store
        .sweep_zone(&engine, "zone-hill", now)
        .unwrap()
        .expect("zone exists");

    // Three days since the intel, one of them grace: ~4 points of decay.
    assert!((factors.time_decay - 4.0).abs() < 0.01, "got {}", factors.time_decay);
    assert!(swept.score < state.score);
    assert_eq!(swept.intel_count_24h, 0);

    // Unknown zones are skipped, not invented.
    assert!(store.sweep_zone(&engine, "zone-ghost", now).unwrap().is_none());
}

// ── Per-zone serialization ───────────────────────────────────────────────

#[test]
fn concurrent_submissions_to_one_zone_never_lose_updates() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(ZoneStore::open(&dir.path().join("vigil.db")).unwrap());
    let engine = Arc::new(ConfidenceEngine::new());
    let now = Utc::now();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let store = Arc::clone(&store);
        let engine = Arc::clone(&engine);
        handles.push(std::thread::spawn(move || {
            for _ in 0..5 {
                let sub = make_submission(
                    "zone-contended",
                    IntelType::QuietConfirmed,
                    1.0,
                    serde_json::json!({}),
                    Utc::now(),
                );
                store.record_submission(&*engine, &sub, Utc::now()).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let state = store.get_state("zone-contended").unwrap().unwrap();
    assert_eq!(
        state.intel_count_24h, 20,
        "serialized read-modify-write must count every submission"
    );
    let window = store
        .submissions_since("zone-contended", now - Duration::hours(1))
        .unwrap();
    assert_eq!(window.len(), 20);
}
