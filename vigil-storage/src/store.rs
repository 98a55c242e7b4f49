//! ZoneStore — owns the connection pool, implements [`IZoneStore`], and
//! enforces the per-zone update discipline: read-modify-write cycles for
//! the same zone are serialized behind a zone-keyed lock, while different
//! zones proceed fully in parallel.

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rusqlite::Connection;

use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::intel::{IntelSubmission, IntelType};
use vigil_core::traits::{IConfidenceEngine, IZoneStore, ZoneEvidence};
use vigil_core::zone::{ConfidenceFactors, PriceBaseline, PriceObservation, ZoneConfidenceState};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries;

pub struct ZoneStore {
    pool: ConnectionPool,
    zone_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ZoneStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> VigilResult<Self> {
        let pool = ConnectionPool::open(path, 4)?;
        let store = Self {
            pool,
            zone_locks: DashMap::new(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> VigilResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let store = Self {
            pool,
            zone_locks: DashMap::new(),
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> VigilResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            if self.pool.db_path.is_some() && !crate::pool::pragmas::verify_wal_mode(conn)? {
                tracing::warn!("WAL mode not active; concurrent reads will contend with writes");
            }
            Ok(())
        })
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: the read pool (no writer contention). In-memory: the
    /// writer, since a separate in-memory connection would be an isolated
    /// database.
    fn with_reader<F, T>(&self, f: F) -> VigilResult<T>
    where
        F: FnOnce(&Connection) -> VigilResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn_sync(f),
        }
    }

    fn zone_lock(&self, zone_id: &str) -> Arc<Mutex<()>> {
        self.zone_locks
            .entry(zone_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Run a closure holding the zone's update lock. Live submissions and
    /// the daily sweep both come through here, so a sweep can never race
    /// a submission landing on the same zone.
    pub fn with_zone_lock<F, T>(&self, zone_id: &str, f: F) -> VigilResult<T>
    where
        F: FnOnce() -> VigilResult<T>,
    {
        let lock = self.zone_lock(zone_id);
        let _guard = lock.lock().map_err(|_| StorageError::ZoneLockPoisoned {
            zone_id: zone_id.to_string(),
        })?;
        f()
    }

    /// Record one submission and recompute its zone: the full
    /// fetch → compose → upsert cycle under the zone's lock.
    pub fn record_submission<E: IConfidenceEngine>(
        &self,
        engine: &E,
        submission: &IntelSubmission,
        now: DateTime<Utc>,
    ) -> VigilResult<(ZoneConfidenceState, ConfidenceFactors)> {
        let zone_id = submission.zone_id.clone();
        self.with_zone_lock(&zone_id, || {
            // The baseline must predate the new sample, so derive the
            // price signal before the insert.
            let price_observation = self.derive_price_observation(submission)?;
            self.insert_submission(submission)?;

            let current = self.get_state(&zone_id)?;
            let since = now - Duration::hours(engine.evidence_window_hours() as i64);
            let window = self.submissions_since(&zone_id, since)?;
            let hazard_count = self.hazard_report_count(
                &zone_id,
                now - Duration::hours(engine.hazard_window_hours() as i64),
            )?;

            let evidence = ZoneEvidence {
                zone_id: &zone_id,
                now,
                submission: Some(submission),
                window_24h: &window,
                hazard_report_count: hazard_count,
                price_observation,
            };
            let (state, factors) = engine.apply(current.as_ref(), &evidence)?;
            self.upsert_state(&state)?;
            Ok((state, factors))
        })
    }

    /// Decay-only recomputation of one zone, under the same lock as live
    /// submissions. `None` when the zone has no state row.
    pub fn sweep_zone<E: IConfidenceEngine>(
        &self,
        engine: &E,
        zone_id: &str,
        now: DateTime<Utc>,
    ) -> VigilResult<Option<(ZoneConfidenceState, ConfidenceFactors)>> {
        self.with_zone_lock(zone_id, || match self.get_state(zone_id)? {
            Some(current) => {
                let (state, factors) = engine.sweep(&current, now)?;
                self.upsert_state(&state)?;
                Ok(Some((state, factors)))
            }
            None => Ok(None),
        })
    }

    /// Price submissions carry `{"item": ..., "price": ...}` payloads.
    /// A payload without them yields no signal (the anomaly detector
    /// treats missing baselines as no-anomaly anyway).
    fn derive_price_observation(
        &self,
        submission: &IntelSubmission,
    ) -> VigilResult<Option<PriceObservation>> {
        if submission.intel_type != IntelType::PriceSubmission {
            return Ok(None);
        }
        let item = submission.payload.get("item").and_then(|v| v.as_str());
        let price = submission.payload.get("price").and_then(|v| v.as_f64());
        let (item, price) = match (item, price) {
            (Some(item), Some(price)) => (item, price),
            _ => {
                tracing::warn!(
                    submission_id = %submission.id,
                    zone_id = %submission.zone_id,
                    "price submission without item/price payload; skipping anomaly check"
                );
                return Ok(None);
            }
        };

        let baseline = self.price_baseline(&submission.zone_id, item)?;
        Ok(baseline.map(|baseline| PriceObservation::new(price, baseline)))
    }
}

impl IZoneStore for ZoneStore {
    fn get_state(&self, zone_id: &str) -> VigilResult<Option<ZoneConfidenceState>> {
        self.with_reader(|conn| queries::zone_state::get_state(conn, zone_id))
    }

    fn upsert_state(&self, state: &ZoneConfidenceState) -> VigilResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| queries::zone_state::upsert_state(conn, state))
    }

    fn zone_ids(&self) -> VigilResult<Vec<String>> {
        self.with_reader(queries::zone_state::zone_ids)
    }

    fn insert_submission(&self, submission: &IntelSubmission) -> VigilResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| queries::submissions::insert_submission(conn, submission))
    }

    fn submissions_since(
        &self,
        zone_id: &str,
        since: DateTime<Utc>,
    ) -> VigilResult<Vec<IntelSubmission>> {
        self.with_reader(|conn| queries::submissions::submissions_since(conn, zone_id, since))
    }

    fn hazard_report_count(&self, zone_id: &str, since: DateTime<Utc>) -> VigilResult<u32> {
        self.with_reader(|conn| queries::submissions::hazard_report_count(conn, zone_id, since))
    }

    fn price_baseline(&self, zone_id: &str, item: &str) -> VigilResult<Option<PriceBaseline>> {
        self.with_reader(|conn| queries::submissions::price_baseline(conn, zone_id, item))
    }
}
