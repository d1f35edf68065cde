//! Output formatting: flattening journeys into rows for a UI to render.
//!
//! This is the one piece of the pipeline with an external consumer in
//! mind, so its output type derives `serde::Serialize` — but nothing
//! here depends on any particular wire format or transport; the crate
//! has no HTTP layer of its own.

use serde::Serialize;

use crate::model::{Journey, LineId, StationId, Time, TransportType};

/// One leg of one journey, flattened into the shape a results table
/// would render.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyRow {
    pub start_id: StationId,
    pub start_time: Time,
    pub line_id: LineId,
    pub transport_type: TransportType,
    pub stop_time: Time,
    pub stop_id: StationId,
    pub delay_probability: f64,
    pub delay_parameter: f64,
    pub arrival_probability: f64,
    pub transfers: usize,
    pub path: usize,
}

/// Flattens `journeys` into one row per leg. `path` is the 0-based index
/// of the journey the row belongs to; `transfers` is that journey's
/// distinct-line-id count, repeated across all of its rows.
///
/// # Examples
///
/// ```
/// use profile_search::format::to_rows;
/// use profile_search::model::{Connection, LineId, StationId, Time, TransportType};
/// use profile_search::engine::{FindRequest, ProfileSearchEngine};
/// use profile_search::model::FootpathIndex;
///
/// let connections = vec![Connection::new(
///     StationId::new(0), Time::new(1000), LineId::new("L1"), TransportType::Bus,
///     Time::new(1100), StationId::new(1), 0.1, 0.01,
/// ).unwrap()];
/// let engine = ProfileSearchEngine::new(connections, FootpathIndex::new());
/// let table = engine.find(
///     FindRequest::new(StationId::new(0), StationId::new(1), Time::new(1100)).min_probability(0.0),
/// ).unwrap();
/// let journeys = table.best_journeys(StationId::new(0), 0.999, 8);
///
/// let rows = to_rows(&journeys);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].path, 0);
/// assert_eq!(rows[0].transfers, 1);
/// ```
pub fn to_rows(journeys: &[Journey]) -> Vec<JourneyRow> {
    let mut rows = Vec::new();

    for (path, journey) in journeys.iter().enumerate() {
        let transfers = journey.transfers();
        for leg in journey.legs() {
            let c = &leg.connection;
            rows.push(JourneyRow {
                start_id: c.start_id(),
                start_time: c.start_time(),
                line_id: c.line_id().clone(),
                transport_type: c.transport_type(),
                stop_time: c.stop_time(),
                stop_id: c.stop_id(),
                delay_probability: c.delay_probability(),
                delay_parameter: c.delay_parameter(),
                arrival_probability: leg.arrival_probability,
                transfers,
                path,
            });
        }
    }

    rows
}
