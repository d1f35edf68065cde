//! Scheduled connections: the atomic unit the scan sweeps over.

use crate::model::{EngineError, LineId, StationId, Time, TransportType};

/// A single scheduled vehicle hop between two stations on one line, or a
/// synthetic footpath/sentinel connection minted during the scan.
///
/// Constructed only via [`Connection::new`], which enforces the
/// `MalformedConnection` invariants of the error model: `stop_time` is
/// never before `start_time`, and the delay parameters are finite and
/// within their valid ranges.
///
/// # Examples
///
/// ```
/// use profile_search::model::{Connection, LineId, StationId, Time, TransportType};
///
/// let c = Connection::new(
///     StationId::new(0),
///     Time::new(1000),
///     LineId::new("L1"),
///     TransportType::Bus,
///     Time::new(1100),
///     StationId::new(1),
///     0.1,
///     0.01,
/// )
/// .unwrap();
/// assert_eq!(c.start_id(), StationId::new(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    start_id: StationId,
    start_time: Time,
    line_id: LineId,
    transport_type: TransportType,
    stop_time: Time,
    stop_id: StationId,
    delay_probability: f64,
    delay_parameter: f64,
}

impl Connection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_id: StationId,
        start_time: Time,
        line_id: LineId,
        transport_type: TransportType,
        stop_time: Time,
        stop_id: StationId,
        delay_probability: f64,
        delay_parameter: f64,
    ) -> Result<Self, EngineError> {
        if stop_time < start_time {
            return Err(EngineError::MalformedConnection(format!(
                "stop_time {stop_time} precedes start_time {start_time}"
            )));
        }
        if !delay_probability.is_finite() || !(0.0..=1.0).contains(&delay_probability) {
            return Err(EngineError::MalformedConnection(format!(
                "delay_probability {delay_probability} is not a finite value in [0, 1]"
            )));
        }
        if !delay_parameter.is_finite() || delay_parameter < 0.0 {
            return Err(EngineError::MalformedConnection(format!(
                "delay_parameter {delay_parameter} is not a finite non-negative value"
            )));
        }

        Ok(Self {
            start_id,
            start_time,
            line_id,
            transport_type,
            stop_time,
            stop_id,
            delay_probability,
            delay_parameter,
        })
    }

    /// Builds the sentinel connection placed at the arrival station: a
    /// zero-duration, zero-risk marker whose `stop_id` is
    /// [`StationId::SENTINEL`] and whose `line_id` is the empty string.
    pub(crate) fn sentinel(arrival_station: StationId, arrival_time: Time) -> Self {
        Self {
            start_id: arrival_station,
            start_time: arrival_time,
            line_id: LineId::sentinel(),
            transport_type: TransportType::Foot,
            stop_time: arrival_time,
            stop_id: StationId::SENTINEL,
            delay_probability: 0.0,
            delay_parameter: 0.0,
        }
    }

    /// Builds a synthetic footpath connection emitted during relaxation.
    /// Carries no delay risk: `delay_probability` and `delay_parameter`
    /// are both zero.
    pub(crate) fn footpath(
        origin: StationId,
        depart: Time,
        counter: u64,
        arrive: Time,
        destination: StationId,
    ) -> Self {
        Self {
            start_id: origin,
            start_time: depart,
            line_id: LineId::footpath(counter),
            transport_type: TransportType::Foot,
            stop_time: arrive,
            stop_id: destination,
            delay_probability: 0.0,
            delay_parameter: 0.0,
        }
    }

    pub fn start_id(&self) -> StationId {
        self.start_id
    }

    pub fn start_time(&self) -> Time {
        self.start_time
    }

    pub fn line_id(&self) -> &LineId {
        &self.line_id
    }

    pub fn transport_type(&self) -> TransportType {
        self.transport_type
    }

    pub fn stop_time(&self) -> Time {
        self.stop_time
    }

    pub fn stop_id(&self) -> StationId {
        self.stop_id
    }

    pub fn delay_probability(&self) -> f64 {
        self.delay_probability
    }

    pub fn delay_parameter(&self) -> f64 {
        self.delay_parameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(n: usize) -> StationId {
        StationId::new(n)
    }

    #[test]
    fn rejects_stop_before_start() {
        let err = Connection::new(
            station(0),
            Time::new(100),
            LineId::new("L1"),
            TransportType::Bus,
            Time::new(50),
            station(1),
            0.1,
            0.01,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::MalformedConnection(_)));
    }

    #[test]
    fn accepts_zero_duration() {
        assert!(Connection::new(
            station(0),
            Time::new(100),
            LineId::new("L1"),
            TransportType::Bus,
            Time::new(100),
            station(1),
            0.1,
            0.01,
        )
        .is_ok());
    }

    #[test]
    fn rejects_out_of_range_delay_probability() {
        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            let err = Connection::new(
                station(0),
                Time::new(0),
                LineId::new("L1"),
                TransportType::Bus,
                Time::new(10),
                station(1),
                bad,
                0.01,
            )
            .unwrap_err();
            assert!(matches!(err, EngineError::MalformedConnection(_)));
        }
    }

    #[test]
    fn rejects_negative_or_non_finite_delay_parameter() {
        for bad in [-0.01, f64::NAN, f64::NEG_INFINITY] {
            let err = Connection::new(
                station(0),
                Time::new(0),
                LineId::new("L1"),
                TransportType::Bus,
                Time::new(10),
                station(1),
                0.1,
                bad,
            )
            .unwrap_err();
            assert!(matches!(err, EngineError::MalformedConnection(_)));
        }
    }

    #[test]
    fn sentinel_has_empty_line_and_sentinel_stop() {
        let s = Connection::sentinel(station(5), Time::new(1400));
        assert!(s.line_id().is_sentinel());
        assert_eq!(s.stop_id(), StationId::SENTINEL);
        assert_eq!(s.start_time(), Time::new(1400));
        assert_eq!(s.stop_time(), Time::new(1400));
    }

    #[test]
    fn footpath_connection_carries_no_delay_risk() {
        let f = Connection::footpath(station(0), Time::new(780), 0, Time::new(1080), station(1));
        assert!(f.line_id().is_footpath());
        assert_eq!(f.delay_probability(), 0.0);
        assert_eq!(f.delay_parameter(), 0.0);
    }
}
