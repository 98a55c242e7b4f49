//! Contracts between the engine, the store, and their callers.

mod engine;
mod store;

pub use engine::{IConfidenceEngine, ZoneEvidence};
pub use store::IZoneStore;
