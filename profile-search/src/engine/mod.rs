//! The profile search engine: a reverse-time single-sweep scan over a
//! time-ordered connection stream.
//!
//! Unlike a forward search that explores the network from the departure
//! station outward, this engine scans connections in non-increasing
//! `stop_time` order and grows a per-station "profile" of candidate
//! departures backward from the arrival station. One scan answers the
//! query for *every* reachable departure station at once; callers
//! extract journeys from whichever departure station they actually care
//! about via `StationTable::best_journeys`.

pub mod scoring;


use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::model::{
    Connection, EngineError, FootpathIndex, StationEntry, StationId, StationProfile, Time,
};

/// Tunable parameters for one `find` call, plus the fixed departure /
/// arrival stations and deadline for the query.
#[derive(Debug, Clone)]
pub struct FindRequest {
    pub departure_station: StationId,
    pub arrival_station: StationId,
    pub arrival_time: Time,
    pub min_probability: f64,
    pub max_probability: f64,
    pub transfer_time: i64,
}

impl FindRequest {
    pub fn new(departure_station: StationId, arrival_station: StationId, arrival_time: Time) -> Self {
        Self {
            departure_station,
            arrival_station,
            arrival_time,
            min_probability: 0.9,
            max_probability: 0.999_999,
            transfer_time: 120,
        }
    }

    pub fn min_probability(mut self, min_probability: f64) -> Self {
        self.min_probability = min_probability;
        self
    }

    pub fn max_probability(mut self, max_probability: f64) -> Self {
        self.max_probability = max_probability;
        self
    }

    pub fn transfer_time(mut self, transfer_time: i64) -> Self {
        self.transfer_time = transfer_time;
        self
    }
}

/// The immutable timetable an engine is built from: a time-ordered
/// connection table and a footpath index. Owned by the engine so that
/// many independent `find` calls (even from separate threads, since
/// `ProfileSearchEngine` is `Send + Sync`) can run against the same
/// dataset without re-ingesting it.
#[derive(Debug)]
pub struct ProfileSearchEngine {
    connections: Vec<Connection>,
    footpaths: FootpathIndex,
    known_stations: HashSet<StationId>,
    station_count: usize,
}

impl ProfileSearchEngine {
    /// Builds an engine over `connections` (expected pre-sorted by the
    /// caller: `stop_time` descending, `start_time` descending within
    /// ties) and `footpaths`.
    pub fn new(connections: Vec<Connection>, footpaths: FootpathIndex) -> Self {
        let mut known_stations = HashSet::new();
        let mut max_index = 0usize;
        for c in &connections {
            for id in [c.start_id(), c.stop_id()] {
                if !id.is_sentinel() {
                    known_stations.insert(id);
                    max_index = max_index.max(id.index());
                }
            }
        }
        // Footpaths may reference stations that never appear in C; the
        // dense table still needs room for them even though `find` only
        // accepts departure/arrival stations known from C (spec §7).
        for id in footpaths.station_ids() {
            max_index = max_index.max(id.index());
        }

        Self {
            station_count: max_index + 1,
            connections,
            footpaths,
            known_stations,
        }
    }

    /// Runs the reverse-time scan for one query, returning a fully
    /// populated `StationTable`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownStation`] if either station is
    /// absent from the connection table, or
    /// [`EngineError::InvalidProbability`] if the probability bounds are
    /// out of range or inverted.
    #[instrument(skip(self), fields(
        departure = %request.departure_station,
        arrival = %request.arrival_station,
        arrival_time = %request.arrival_time,
    ))]
    pub fn find(&self, request: FindRequest) -> Result<StationTable, EngineError> {
        self.validate(&request)?;

        let mut profiles: Vec<StationProfile> =
            (0..self.station_count).map(|_| StationProfile::empty()).collect();

        let arrival_index = request.arrival_station.index();
        profiles[arrival_index] = StationProfile {
            best_p: 1.0,
            firm_dep_time: request.arrival_time,
            entries: vec![StationEntry::new(
                None,
                1.0,
                Connection::sentinel(request.arrival_station, request.arrival_time),
            )],
        };

        let mut departure_min_time = Time::new(-1);
        let mut foot_counter: u64 = 0;

        let start = self
            .connections
            .iter()
            .position(|c| c.stop_time() <= request.arrival_time)
            .unwrap_or(self.connections.len());

        debug!(skipped = start, "scan starting suffix located");

        for c in &self.connections[start..] {
            if c.stop_time() < departure_min_time {
                trace!(stop_time = %c.stop_time(), "departure_min_time reached, stopping scan");
                break;
            }

            if profiles[c.stop_id().index()].best_p < request.min_probability {
                continue;
            }

            let start_profile = &profiles[c.start_id().index()];
            if c.start_time() < start_profile.firm_dep_time {
                continue;
            }

            let stop_entries = &profiles[c.stop_id().index()].entries;
            let Some((best_index, p)) =
                scoring::best_follow_on(c, stop_entries, request.transfer_time)
            else {
                continue;
            };
            if p < request.min_probability {
                continue;
            }

            // Step 5 ("Drop c") means a dominated candidate skips not just
            // its own append but the footpath relaxation that would
            // otherwise reference it (step 9 refers to "the entry just
            // appended in step 6" — there is none to refer to here).
            let start_index = c.start_id().index();
            let appended =
                profiles[start_index].try_append(StationEntry::new(Some(best_index), p, c.clone()));
            if !appended {
                continue;
            }

            if p >= request.max_probability {
                profiles[start_index].firm_dep_time = c.start_time();
                if c.start_id() == request.departure_station {
                    departure_min_time = departure_min_time.max(profiles[start_index].firm_dep_time);
                }
            }
            profiles[start_index].best_p = profiles[start_index].best_p.max(p);
            let follow_index = profiles[start_index].entries.len() - 1;

            // Footpath relaxation: walks ending at c.start_id() let an
            // earlier, pedestrian-reached station feed into the entry
            // just appended above.
            let incoming: Vec<(StationId, i64)> = self.footpaths.incoming(c.start_id()).to_vec();
            for (prev_id, walk_seconds) in incoming {
                let prev_dep = c.start_time() - walk_seconds - request.transfer_time;
                let prev_index = prev_id.index();

                if prev_dep < profiles[prev_index].firm_dep_time {
                    continue;
                }

                let synthetic = Connection::footpath(
                    prev_id,
                    prev_dep,
                    foot_counter,
                    prev_dep + walk_seconds,
                    c.start_id(),
                );
                foot_counter += 1;

                let appended = profiles[prev_index]
                    .try_append(StationEntry::new(Some(follow_index), p, synthetic));
                if appended {
                    if p >= request.max_probability {
                        profiles[prev_index].firm_dep_time = prev_dep;
                        if prev_id == request.departure_station {
                            departure_min_time = departure_min_time.max(prev_dep);
                        }
                    }
                    profiles[prev_index].best_p = profiles[prev_index].best_p.max(p);
                }
            }
        }

        Ok(StationTable { profiles })
    }

    fn validate(&self, request: &FindRequest) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&request.min_probability)
            || !(0.0..=1.0).contains(&request.max_probability)
            || request.min_probability > request.max_probability
        {
            return Err(EngineError::InvalidProbability {
                min: request.min_probability,
                max: request.max_probability,
            });
        }

        if !self.known_stations.contains(&request.departure_station) {
            return Err(EngineError::UnknownStation(request.departure_station));
        }
        if !self.known_stations.contains(&request.arrival_station) {
            return Err(EngineError::UnknownStation(request.arrival_station));
        }

        Ok(())
    }
}

/// The populated station profile table `S`, the result of one `find`
/// call. Read-only: extraction walks it but never mutates it.
#[derive(Debug)]
pub struct StationTable {
    profiles: Vec<StationProfile>,
}

impl StationTable {
    pub(crate) fn profile(&self, station: StationId) -> Option<&StationProfile> {
        self.profiles.get(station.index())
    }

    pub(crate) fn profiles(&self) -> &[StationProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FootpathIndexBuilder, LineId, TransportType};

    fn station(n: usize) -> StationId {
        StationId::new(n)
    }

    fn bus(
        start_id: usize,
        start_time: i64,
        line: &str,
        stop_time: i64,
        stop_id: usize,
        pd: f64,
        lambda: f64,
    ) -> Connection {
        Connection::new(
            station(start_id),
            Time::new(start_time),
            LineId::new(line),
            TransportType::Bus,
            Time::new(stop_time),
            station(stop_id),
            pd,
            lambda,
        )
        .unwrap()
    }

    #[test]
    fn rejects_unknown_departure_station() {
        let engine = ProfileSearchEngine::new(
            vec![bus(0, 1000, "L1", 1100, 1, 0.1, 0.01)],
            FootpathIndex::new(),
        );
        let request = FindRequest::new(station(9), station(1), Time::new(1100)).min_probability(0.0);
        let err = engine.find(request).unwrap_err();
        assert!(matches!(err, EngineError::UnknownStation(s) if s == station(9)));
    }

    #[test]
    fn rejects_invalid_probability_bounds() {
        let engine = ProfileSearchEngine::new(
            vec![bus(0, 1000, "L1", 1100, 1, 0.1, 0.01)],
            FootpathIndex::new(),
        );
        let request = FindRequest::new(station(0), station(1), Time::new(1100)).min_probability(0.9).max_probability(0.5);
        let err = engine.find(request).unwrap_err();
        assert!(matches!(err, EngineError::InvalidProbability { .. }));
    }

    #[test]
    fn scenario_s1_direct_same_line() {
        let engine = ProfileSearchEngine::new(
            vec![bus(0, 1000, "L1", 1100, 1, 0.1, 0.01)],
            FootpathIndex::new(),
        );
        let request = FindRequest::new(station(0), station(1), Time::new(1100)).min_probability(0.0);
        let table = engine.find(request).unwrap();
        let entries = &table.profile(station(0)).unwrap().entries;
        assert_eq!(entries.len(), 1);
        assert!((entries[0].arrival_probability - 0.9).abs() < 1e-9);
    }

    #[test]
    fn scenario_s4_transfer_infeasible_yields_no_entry() {
        let engine = ProfileSearchEngine::new(
            vec![
                bus(0, 1000, "L1", 1100, 2, 0.1, 0.01),
                bus(2, 1150, "L2", 1400, 1, 0.2, 0.02),
            ],
            FootpathIndex::new(),
        );
        let request = FindRequest::new(station(0), station(1), Time::new(1400)).min_probability(0.0);
        let table = engine.find(request).unwrap();
        assert!(table.profile(station(0)).unwrap().entries.is_empty());
    }

    #[test]
    fn scenario_s5_footpath_relaxation() {
        let engine = ProfileSearchEngine::new(
            vec![bus(2, 1200, "L1", 1300, 1, 0.1, 0.01)],
            FootpathIndexBuilder::new().add(station(0), station(2), 300).build(),
        );
        let request = FindRequest::new(station(0), station(1), Time::new(1300)).min_probability(0.0);
        let table = engine.find(request).unwrap();
        let entries = &table.profile(station(0)).unwrap().entries;
        assert_eq!(entries.len(), 1);
        assert!(entries[0].connection.line_id().is_footpath());
        assert!((entries[0].arrival_probability - 0.9).abs() < 1e-9);
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProfileSearchEngine>();
    }
}
