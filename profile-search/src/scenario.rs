//! JSON scenario loading for the demo binary.
//!
//! A scenario is a self-contained `(connections, footpaths, query)` bundle:
//! everything one `find` call needs, in one file, so the binary has no
//! dependency on any particular timetable ingestion pipeline (spec §1 "OUT
//! OF SCOPE: raw timetable ingestion").

use serde::Deserialize;

use crate::engine::FindRequest;
use crate::model::{Connection, EngineError, FootpathIndex, LineId, StationId, Time, TransportType};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    connections: Vec<RawConnection>,
    #[serde(default)]
    footpaths: Vec<RawFootpath>,
    query: RawQuery,
}

#[derive(Debug, Deserialize)]
struct RawConnection {
    start_id: usize,
    start_time: i64,
    line_id: String,
    transport_type: RawTransportType,
    stop_time: i64,
    stop_id: usize,
    delay_probability: f64,
    delay_parameter: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawTransportType {
    Bus,
    Zug,
    Tram,
    Schiff,
    Foot,
}

impl From<RawTransportType> for TransportType {
    fn from(t: RawTransportType) -> Self {
        match t {
            RawTransportType::Bus => TransportType::Bus,
            RawTransportType::Zug => TransportType::Zug,
            RawTransportType::Tram => TransportType::Tram,
            RawTransportType::Schiff => TransportType::Schiff,
            RawTransportType::Foot => TransportType::Foot,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFootpath {
    origin: usize,
    endpoint: usize,
    walk_seconds: i64,
}

#[derive(Debug, Deserialize)]
struct RawQuery {
    departure_station: usize,
    arrival_station: usize,
    arrival_time: i64,
    #[serde(default)]
    min_probability: Option<f64>,
    #[serde(default)]
    max_probability: Option<f64>,
    #[serde(default)]
    transfer_time: Option<i64>,
}

impl Scenario {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The query's departure station, readable before `build` consumes
    /// `self` to produce the engine's owned inputs.
    pub fn departure_station(&self) -> StationId {
        StationId::new(self.query.departure_station)
    }

    /// Builds the engine inputs, dropping (per spec §6, "rows with negative
    /// duration are dropped") any connection `Connection::new` rejects, and
    /// returns the query's `FindRequest` alongside them.
    pub fn build(self) -> Result<(Vec<Connection>, FootpathIndex, FindRequest), EngineError> {
        let mut connections = Vec::with_capacity(self.connections.len());
        for raw in self.connections {
            let connection = Connection::new(
                StationId::new(raw.start_id),
                Time::new(raw.start_time),
                LineId::new(raw.line_id),
                raw.transport_type.into(),
                Time::new(raw.stop_time),
                StationId::new(raw.stop_id),
                raw.delay_probability,
                raw.delay_parameter,
            )?;
            connections.push(connection);
        }
        connections.sort_by(|a, b| {
            b.stop_time()
                .cmp(&a.stop_time())
                .then_with(|| b.start_time().cmp(&a.start_time()))
        });

        let mut footpaths = FootpathIndex::new();
        for raw in self.footpaths {
            footpaths.add(
                StationId::new(raw.origin),
                StationId::new(raw.endpoint),
                raw.walk_seconds,
            );
        }

        let mut request = FindRequest::new(
            StationId::new(self.query.departure_station),
            StationId::new(self.query.arrival_station),
            Time::new(self.query.arrival_time),
        );
        if let Some(min_probability) = self.query.min_probability {
            request = request.min_probability(min_probability);
        }
        if let Some(max_probability) = self.query.max_probability {
            request = request.max_probability(max_probability);
        }
        if let Some(transfer_time) = self.query.transfer_time {
            request = request.transfer_time(transfer_time);
        }

        Ok((connections, footpaths, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_scenario() {
        let json = r#"{
            "connections": [
                {"start_id": 0, "start_time": 1000, "line_id": "L1", "transport_type": "bus",
                 "stop_time": 1100, "stop_id": 1, "delay_probability": 0.1, "delay_parameter": 0.01}
            ],
            "query": {"departure_station": 0, "arrival_station": 1, "arrival_time": 1100, "min_probability": 0.0}
        }"#;

        let scenario = Scenario::parse(json).unwrap();
        let (connections, footpaths, request) = scenario.build().unwrap();
        assert_eq!(connections.len(), 1);
        assert!(footpaths.is_empty());
        assert_eq!(request.min_probability, 0.0);
    }

    #[test]
    fn rejects_malformed_connection() {
        let json = r#"{
            "connections": [
                {"start_id": 0, "start_time": 1000, "line_id": "L1", "transport_type": "bus",
                 "stop_time": 500, "stop_id": 1, "delay_probability": 0.1, "delay_parameter": 0.01}
            ],
            "query": {"departure_station": 0, "arrival_station": 1, "arrival_time": 1100}
        }"#;

        let scenario = Scenario::parse(json).unwrap();
        let err = scenario.build().unwrap_err();
        assert!(matches!(err, EngineError::MalformedConnection(_)));
    }

    #[test]
    fn footpaths_default_to_empty_when_omitted() {
        let json = r#"{
            "connections": [],
            "query": {"departure_station": 0, "arrival_station": 1, "arrival_time": 1100}
        }"#;

        let scenario = Scenario::parse(json).unwrap();
        let (_, footpaths, _) = scenario.build().unwrap();
        assert!(footpaths.is_empty());
    }
}
