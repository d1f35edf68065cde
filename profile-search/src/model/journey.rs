//! The reconstructed-journey output type.

use std::collections::HashSet;

use crate::model::Connection;

/// One leg of a reconstructed journey: the connection taken, paired with
/// the arrival probability recorded for the station-profile entry that
/// leg came from.
#[derive(Debug, Clone)]
pub struct JourneyLeg {
    pub arrival_probability: f64,
    pub connection: Connection,
}

/// A complete journey from a departure station to the arrival station,
/// as a sequence of legs in travel order (earliest `start_time` first).
///
/// Always has at least one leg; the extractor never produces an empty
/// journey (an empty result is simply an empty `Vec<Journey>`).
#[derive(Debug, Clone)]
pub struct Journey {
    legs: Vec<JourneyLeg>,
}

impl Journey {
    /// Constructs a journey from its legs, already in travel order.
    ///
    /// # Panics
    ///
    /// Panics if `legs` is empty; the extractor is the only caller and
    /// never produces an empty leg list.
    pub(crate) fn new(legs: Vec<JourneyLeg>) -> Self {
        assert!(!legs.is_empty(), "a journey must have at least one leg");
        Self { legs }
    }

    pub fn legs(&self) -> &[JourneyLeg] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// The journey's overall probability of reaching the arrival station
    /// on time: the arrival probability recorded on its first leg, which
    /// already accounts for every transfer downstream.
    pub fn arrival_probability(&self) -> f64 {
        self.legs[0].arrival_probability
    }

    pub fn departure_time(&self) -> crate::model::Time {
        self.legs[0].connection.start_time()
    }

    /// Count of distinct `line_id` values across the journey's legs.
    /// Synthetic footpath ids (`foot:0`, `foot:1`, ...) are distinct by
    /// construction, so each walked leg still contributes one to the
    /// count.
    pub fn transfers(&self) -> usize {
        self.legs
            .iter()
            .map(|leg| leg.connection.line_id().as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineId, StationId, Time, TransportType};

    fn leg(start_id: usize, start: i64, line: &str, stop: i64, stop_id: usize, p: f64) -> JourneyLeg {
        let connection = Connection::new(
            StationId::new(start_id),
            Time::new(start),
            LineId::new(line),
            TransportType::Bus,
            Time::new(stop),
            StationId::new(stop_id),
            0.1,
            0.01,
        )
        .unwrap();
        JourneyLeg {
            arrival_probability: p,
            connection,
        }
    }

    #[test]
    fn single_leg_journey() {
        let journey = Journey::new(vec![leg(0, 1000, "L1", 1100, 1, 0.9)]);
        assert_eq!(journey.leg_count(), 1);
        assert_eq!(journey.arrival_probability(), 0.9);
        assert_eq!(journey.departure_time(), Time::new(1000));
        assert_eq!(journey.transfers(), 1);
    }

    #[test]
    fn transfers_counts_distinct_line_ids() {
        let journey = Journey::new(vec![
            leg(0, 1000, "L1", 1100, 2, 0.76),
            leg(2, 1300, "L2", 1400, 1, 0.8),
        ]);
        assert_eq!(journey.transfers(), 2);
    }

    #[test]
    fn repeated_footpath_ids_each_count_once() {
        let journey = Journey::new(vec![
            leg(0, 780, "foot:0", 1080, 2, 0.9),
            leg(2, 1080, "foot:1", 1200, 1, 0.9),
        ]);
        assert_eq!(journey.transfers(), 2);
    }

    #[test]
    #[should_panic]
    fn empty_journey_panics() {
        Journey::new(vec![]);
    }
}
