//! Journey extraction: reading the populated station profile table back
//! out as a ranked list of journeys.

use crate::engine::StationTable;
use crate::model::{Journey, JourneyLeg, StationEntry, StationId, StationProfile};

/// Default extraction threshold (§4.3): once a journey departing later
/// has already reached this probability, earlier (lower-probability)
/// departures add nothing to the frontier.
pub const DEFAULT_MAX_PROBABILITY_EXTRACT: f64 = 0.999;

/// Default cap on the number of journeys returned from one extraction.
pub const DEFAULT_MAX_JOURNEYS: usize = 8;

impl StationTable {
    /// Extracts the best journeys departing from `departure_station`,
    /// ordered so each later entry trades an earlier departure for a
    /// strictly higher arrival probability.
    ///
    /// Returns at most `max_journeys` entries; empty if no entry at
    /// `departure_station` reached the probability threshold used by the
    /// scan that produced this table.
    pub fn best_journeys(
        &self,
        departure_station: StationId,
        max_probability_extract: f64,
        max_journeys: usize,
    ) -> Vec<Journey> {
        let Some(profile) = self.profile(departure_station) else {
            return Vec::new();
        };

        let mut candidates: Vec<&StationEntry> = profile.entries.iter().collect();
        candidates.sort_by(|a, b| {
            b.connection
                .start_time()
                .cmp(&a.connection.start_time())
                .then_with(|| {
                    b.arrival_probability
                        .partial_cmp(&a.arrival_probability)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        let mut best_p_so_far = 0.0;
        let mut journeys = Vec::new();

        for entry in candidates {
            if best_p_so_far >= max_probability_extract {
                break;
            }
            if entry.arrival_probability > best_p_so_far {
                best_p_so_far = entry.arrival_probability;
                journeys.push(Journey::new(reconstruct(self.profiles(), entry)));
            }
        }

        journeys.truncate(max_journeys);
        journeys
    }
}

/// Walks the back-reference chain starting at `entry`, collecting one
/// [`JourneyLeg`] per hop until it reaches the sentinel entry at the
/// arrival station (identified by its connection's sentinel `stop_id`),
/// which is not itself emitted as a leg.
fn reconstruct(profiles: &[StationProfile], entry: &StationEntry) -> Vec<JourneyLeg> {
    let mut legs = vec![JourneyLeg {
        arrival_probability: entry.arrival_probability,
        connection: entry.connection.clone(),
    }];

    let mut station = entry.connection.stop_id();
    let mut next_index = entry.next_index;

    while let Some(index) = next_index {
        let next_entry = &profiles[station.index()].entries[index];
        if next_entry.connection.stop_id().is_sentinel() {
            break;
        }
        legs.push(JourneyLeg {
            arrival_probability: next_entry.arrival_probability,
            connection: next_entry.connection.clone(),
        });
        station = next_entry.connection.stop_id();
        next_index = next_entry.next_index;
    }

    legs
}
