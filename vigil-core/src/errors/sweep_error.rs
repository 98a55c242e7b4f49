/// Errors that abort a decay sweep outright.
///
/// Per-zone failures during a sweep are logged and counted, never raised:
/// one bad zone must not stop the rest of the batch.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("could not list zones for sweep: {reason}")]
    ZoneListing { reason: String },
}
