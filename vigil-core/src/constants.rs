/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reason code attached to a zone when a submitted price deviates
/// sharply from the established baseline.
pub const ANOMALY_REASON_PRICE_DEVIATION: &str = "PRICE_DEVIATION";

/// Seconds in one day, used for fractional-day decay math.
pub const SECS_PER_DAY: f64 = 86_400.0;

/// Maximum number of submissions fetched per trailing-window query.
pub const MAX_WINDOW_FETCH: usize = 500;
