//! Transfer-success probability scoring.
//!
//! Given a candidate connection and a follow-on entry waiting at its stop
//! station, computes the probability of making the transfer (or staying
//! aboard) and completing the journey via that follow-on.

use crate::model::{Connection, StationEntry};

/// Probability of successfully continuing the journey from `c` via
/// follow-on entry `f`, or `None` if `f` is not reachable from `c` at all
/// (not the same line, not the sentinel, and not a feasible real
/// transfer).
///
/// # Examples
///
/// ```
/// use profile_search::engine::scoring::transfer_probability;
/// use profile_search::model::{Connection, LineId, StationEntry, StationId, Time, TransportType};
///
/// let c = Connection::new(
///     StationId::new(0), Time::new(1000), LineId::new("L1"), TransportType::Bus,
///     Time::new(1100), StationId::new(1), 0.1, 0.01,
/// ).unwrap();
///
/// let sentinel = Connection::new(
///     StationId::new(1), Time::new(1100), LineId::sentinel(), TransportType::Foot,
///     Time::new(1100), StationId::SENTINEL, 0.0, 0.0,
/// ).unwrap();
/// let entry = StationEntry::new(None, 1.0, sentinel);
///
/// let p = transfer_probability(&c, &entry, 120).unwrap();
/// assert!((p - 0.9).abs() < 1e-9);
/// ```
pub fn transfer_probability(c: &Connection, f: &StationEntry, transfer_time: i64) -> Option<f64> {
    let follow = &f.connection;

    if follow.line_id() == c.line_id() && follow.start_time() >= c.stop_time() {
        return Some(f.arrival_probability);
    }

    if follow.line_id().is_sentinel() && follow.start_time() >= c.stop_time() {
        let slack = follow.start_time().seconds_since(c.stop_time()) as f64;
        let miss_probability = c.delay_probability() * (-c.delay_parameter() * slack).exp();
        return Some(f.arrival_probability * (1.0 - miss_probability));
    }

    if follow.start_time() >= c.stop_time() + transfer_time {
        let slack = follow
            .start_time()
            .seconds_since(c.stop_time() + transfer_time) as f64;
        let miss_probability = c.delay_probability() * (-c.delay_parameter() * slack).exp();
        return Some(f.arrival_probability * (1.0 - miss_probability));
    }

    None
}

/// Scans a station's entry list for the best eligible follow-on for `c`,
/// returning its index within the list and the resulting probability.
/// Ties (equal probability) favour whichever entry was encountered
/// first.
pub fn best_follow_on(
    c: &Connection,
    stop_entries: &[StationEntry],
    transfer_time: i64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, entry) in stop_entries.iter().enumerate() {
        let Some(p) = transfer_probability(c, entry, transfer_time) else {
            continue;
        };

        let improves = match best {
            Some((_, best_p)) => p > best_p,
            None => true,
        };
        if improves {
            best = Some((index, p));
        }
    }

    best
}
