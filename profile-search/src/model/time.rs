//! Absolute timestamps for the connection scan.
//!
//! Unlike Darwin's "HH:MM" wall-clock times, the timetables this engine
//! consumes already carry absolute seconds-since-epoch (or seconds since
//! some dataset-defined origin) per connection, so there is no calendar
//! arithmetic to get right here — just a thin newtype to keep station ids,
//! durations, and timestamps from being accidentally interchanged.

use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

/// An absolute timestamp, in seconds.
///
/// # Examples
///
/// ```
/// use profile_search::model::Time;
///
/// let depart = Time::new(1_000);
/// let arrive = Time::new(1_300);
/// assert_eq!(arrive.seconds_since(depart), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(i64);

impl Time {
    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn as_seconds(&self) -> i64 {
        self.0
    }

    /// Seconds elapsed between `earlier` and `self`. Negative if `self` is
    /// before `earlier`.
    pub fn seconds_since(&self, earlier: Time) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<i64> for Time {
    type Output = Time;

    fn add(self, rhs: i64) -> Time {
        Time(self.0 + rhs)
    }
}

impl Sub<i64> for Time {
    type Output = Time;

    fn sub(self, rhs: i64) -> Time {
        Time(self.0 - rhs)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}
