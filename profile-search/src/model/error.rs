//! Engine error types.
//!
//! These are the only failures the engine surfaces explicitly; a query
//! that simply finds nothing is not an error (see `StationTable::best_journeys`,
//! which returns an empty `Vec` in that case).

use crate::model::StationId;

/// Errors returned from [`crate::engine::ProfileSearchEngine::find`] or
/// from [`crate::model::Connection::new`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// `departure_station` or `arrival_station` was not present in the
    /// connection table.
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// `min_probability`/`max_probability` outside `[0, 1]`, or
    /// `min_probability > max_probability`.
    #[error("invalid probability bounds: min={min}, max={max}")]
    InvalidProbability { min: f64, max: f64 },

    /// `stop_time < start_time`, or a non-finite/out-of-range delay
    /// parameter, rejected at construction time.
    #[error("malformed connection: {0}")]
    MalformedConnection(String),
}
