//! Per-station profile state maintained during the scan.

use crate::model::{Connection, Time};

/// A single candidate departure recorded at a station during the scan.
///
/// `next_index` is an arena-style back-reference: an index into
/// `S[connection.stop_id()].entries`, pointing at the follow-on leg this
/// entry continues into. Because that target list is append-only during
/// one scan, the index stays valid for the lifetime of the query. It is
/// `None` only for the sentinel entry placed at the arrival station.
#[derive(Debug, Clone)]
pub struct StationEntry {
    pub next_index: Option<usize>,
    pub arrival_probability: f64,
    pub connection: Connection,
}

impl StationEntry {
    pub fn new(next_index: Option<usize>, arrival_probability: f64, connection: Connection) -> Self {
        Self {
            next_index,
            arrival_probability,
            connection,
        }
    }

    /// True iff appending `candidate` after this entry would be rejected
    /// by the weak dominance filter (§3 invariant 4): this entry has
    /// strictly higher probability *and* strictly later departure time.
    pub fn dominates(&self, candidate_probability: f64, candidate_start_time: Time) -> bool {
        self.arrival_probability > candidate_probability
            && self.connection.start_time() > candidate_start_time
    }
}

/// The running state for one station during a scan: the best probability
/// seen, the latest "firm" departure time, and the append-only entry
/// list.
#[derive(Debug, Clone)]
pub struct StationProfile {
    pub best_p: f64,
    pub firm_dep_time: Time,
    pub entries: Vec<StationEntry>,
}

impl StationProfile {
    /// A station with no recorded departures yet: `best_p = 0`,
    /// `firm_dep_time` the "none" sentinel (`-1`), empty entries.
    pub fn empty() -> Self {
        Self {
            best_p: 0.0,
            firm_dep_time: Time::new(-1),
            entries: Vec::new(),
        }
    }

    /// Appends `entry` if it survives the weak dominance filter against
    /// the last previously appended entry, updating `best_p` either way
    /// is not performed here — callers update `best_p`/`firm_dep_time`
    /// themselves, since those updates depend on scan-local parameters
    /// (`max_probability`, `departure_station`) this type has no view of.
    ///
    /// Returns `true` if the entry was appended (and its index, via
    /// `entries.len() - 1` after the call), `false` if dropped by
    /// dominance.
    pub fn try_append(&mut self, entry: StationEntry) -> bool {
        if let Some(last) = self.entries.last() {
            if last.dominates(entry.arrival_probability, entry.connection.start_time()) {
                return false;
            }
        }
        self.entries.push(entry);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineId, StationId, TransportType};

    fn conn(start_time: i64, stop_id: usize, stop_time: i64) -> Connection {
        Connection::new(
            StationId::new(0),
            Time::new(start_time),
            LineId::new("L1"),
            TransportType::Bus,
            Time::new(stop_time),
            StationId::new(stop_id),
            0.1,
            0.01,
        )
        .unwrap()
    }

    #[test]
    fn empty_profile_has_no_firm_time() {
        let p = StationProfile::empty();
        assert_eq!(p.best_p, 0.0);
        assert_eq!(p.firm_dep_time, Time::new(-1));
        assert!(p.entries.is_empty());
    }

    #[test]
    fn dominated_entry_is_dropped() {
        let mut profile = StationProfile::empty();
        assert!(profile.try_append(StationEntry::new(None, 0.9, conn(1000, 1, 1100))));

        // strictly lower p, strictly earlier start_time: dominated
        assert!(!profile.try_append(StationEntry::new(None, 0.8, conn(900, 1, 1000))));
        assert_eq!(profile.entries.len(), 1);
    }

    #[test]
    fn higher_probability_survives_even_if_earlier() {
        let mut profile = StationProfile::empty();
        assert!(profile.try_append(StationEntry::new(None, 0.9, conn(1000, 1, 1100))));

        // higher p even though earlier: not dominated
        assert!(profile.try_append(StationEntry::new(None, 0.95, conn(900, 1, 1000))));
        assert_eq!(profile.entries.len(), 2);
    }

    #[test]
    fn later_departure_survives_even_if_worse_probability() {
        let mut profile = StationProfile::empty();
        assert!(profile.try_append(StationEntry::new(None, 0.9, conn(1000, 1, 1100))));

        // lower p but later departure: not dominated (only checked against last)
        assert!(profile.try_append(StationEntry::new(None, 0.5, conn(1100, 1, 1200))));
        assert_eq!(profile.entries.len(), 2);
    }

    #[test]
    fn dominance_checks_only_the_last_entry() {
        let mut profile = StationProfile::empty();
        assert!(profile.try_append(StationEntry::new(None, 0.9, conn(1000, 1, 1100))));
        assert!(profile.try_append(StationEntry::new(None, 0.95, conn(900, 1, 1000))));

        // dominated by entries[0] (0.9 > 0.85, 1000 > 950) but NOT by
        // entries[1] (the last one, 0.95 @ 900) -- so it is appended.
        assert!(profile.try_append(StationEntry::new(None, 0.85, conn(950, 1, 1050))));
        assert_eq!(profile.entries.len(), 3);
    }
}
