//! # vigil-engine
//!
//! The Zone Confidence Engine: converts a stream of untrusted, conflicting,
//! time-decaying crowd reports into a single trust score, confidence level,
//! and operational state per zone.
//!
//! Pure computation throughout — every function takes its inputs (including
//! `now`) explicitly and returns a new value, so the engine is safe to call
//! from any number of concurrent request handlers and can be re-run with
//! identical inputs to get identical outputs.

pub mod classify;
pub mod composer;
pub mod engine;
pub mod factors;
pub mod trust;

pub use engine::ConfidenceEngine;
