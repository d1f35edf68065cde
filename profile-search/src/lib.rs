//! Profile search: plans transit journeys under stochastic delays.
//!
//! Given an immutable timetable of scheduled connections and inter-station
//! footpaths, [`engine::ProfileSearchEngine::find`] runs a single reverse-time
//! scan that populates a per-station profile table ([`engine::StationTable`]),
//! from which [`engine::StationTable::best_journeys`] extracts a small ranked
//! list of journeys reaching a target station on time with at least a given
//! probability.

pub mod engine;
pub mod extractor;
pub mod format;
pub mod model;
pub mod scenario;
