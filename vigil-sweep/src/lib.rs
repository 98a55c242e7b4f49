//! # vigil-sweep
//!
//! The daily decay sweep: applies time decay to every zone independent of
//! submission traffic, expires stale hazards, reclassifies, and resets the
//! 24h intel counters.
//!
//! Zones are processed in parallel and fully independently — a failure on
//! one zone is logged and counted, never allowed to abort the rest. Each
//! zone takes the same per-zone lock as live submissions, so a sweep can
//! race a submission safely: whichever full recomputation lands last wins.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;

use vigil_core::errors::{SweepError, VigilResult};
use vigil_core::traits::{IConfidenceEngine, IZoneStore};
use vigil_storage::ZoneStore;

/// Summary of one sweep run.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub zones_processed: usize,
    pub zones_failed: usize,
    pub hazards_cleared: usize,
    pub average_score: f64,
}

enum ZoneOutcome {
    Swept { score: f64, hazard_cleared: bool },
    Missing,
    Failed,
}

/// Batch decay job over every zone in the store.
pub struct DecaySweep<E: IConfidenceEngine> {
    engine: E,
}

impl<E: IConfidenceEngine> DecaySweep<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Run one sweep pass. Designed to be invoked once per calendar day;
    /// re-running immediately is harmless (decay is computed from state,
    /// not incrementally mutated in place).
    pub fn run(&self, store: &ZoneStore, now: DateTime<Utc>) -> VigilResult<SweepReport> {
        let zone_ids = store.zone_ids().map_err(|e| SweepError::ZoneListing {
            reason: e.to_string(),
        })?;
        tracing::info!(zones = zone_ids.len(), "starting decay sweep");

        let outcomes: Vec<ZoneOutcome> = zone_ids
            .par_iter()
            .map(|zone_id| self.sweep_one(store, zone_id, now))
            .collect();

        let mut report = SweepReport {
            zones_processed: 0,
            zones_failed: 0,
            hazards_cleared: 0,
            average_score: 0.0,
        };
        let mut score_sum = 0.0;
        for outcome in outcomes {
            match outcome {
                ZoneOutcome::Swept {
                    score,
                    hazard_cleared,
                } => {
                    report.zones_processed += 1;
                    score_sum += score;
                    if hazard_cleared {
                        report.hazards_cleared += 1;
                    }
                }
                ZoneOutcome::Missing => {}
                ZoneOutcome::Failed => report.zones_failed += 1,
            }
        }
        if report.zones_processed > 0 {
            report.average_score = score_sum / report.zones_processed as f64;
        }

        tracing::info!(
            zones_processed = report.zones_processed,
            zones_failed = report.zones_failed,
            hazards_cleared = report.hazards_cleared,
            "decay sweep finished"
        );
        Ok(report)
    }

    fn sweep_one(&self, store: &ZoneStore, zone_id: &str, now: DateTime<Utc>) -> ZoneOutcome {
        let was_hazardous = match store.get_state(zone_id) {
            Ok(Some(state)) => state.hazard_active,
            Ok(None) => return ZoneOutcome::Missing,
            Err(e) => {
                tracing::warn!(zone_id = %zone_id, error = %e, "zone state fetch failed");
                return ZoneOutcome::Failed;
            }
        };

        match store.sweep_zone(&self.engine, zone_id, now) {
            Ok(Some((state, _factors))) => ZoneOutcome::Swept {
                score: state.score,
                hazard_cleared: was_hazardous && !state.hazard_active,
            },
            Ok(None) => ZoneOutcome::Missing,
            Err(e) => {
                tracing::warn!(zone_id = %zone_id, error = %e, "zone sweep failed");
                ZoneOutcome::Failed
            }
        }
    }
}
