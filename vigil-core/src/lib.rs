//! # vigil-core
//!
//! Foundation crate for the Vigil zone-confidence system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intel;
pub mod traits;
pub mod zone;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{VigilError, VigilResult};
pub use intel::{IntelSubmission, IntelType};
pub use traits::{IConfidenceEngine, IZoneStore, ZoneEvidence};
pub use zone::{
    ConfidenceFactors, ConfidenceLevel, PriceBaseline, PriceObservation, ZoneConfidenceState,
    ZoneState,
};
