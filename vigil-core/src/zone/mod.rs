//! Zone confidence state and its derived classifications.

mod factors;
mod level;
mod state;

pub use factors::{ConfidenceFactors, PriceBaseline, PriceObservation};
pub use level::{ConfidenceLevel, ZoneState};
pub use state::ZoneConfidenceState;
