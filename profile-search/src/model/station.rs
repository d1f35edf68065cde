//! Dense integer station identifiers.
//!
//! Stations are addressed by a small dense integer rather than a string
//! code, so that `StationProfile` tables can be plain `Vec`s indexed by
//! id instead of hash maps. [`StationId::SENTINEL`] marks the terminal
//! slot a journey's back-reference chain walks into once it reaches the
//! arrival station.

use std::fmt;

use serde::Serialize;

/// A dense station identifier.
///
/// # Examples
///
/// ```
/// use profile_search::model::StationId;
///
/// let a = StationId::new(3);
/// assert_eq!(a.index(), 3);
/// assert_ne!(a, StationId::SENTINEL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(usize);

impl StationId {
    /// Marks the terminal station-entry slot at the end of a back-reference
    /// chain. Never a valid input station.
    pub const SENTINEL: StationId = StationId(usize::MAX);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("StationId(sentinel)")
        } else {
            write!(f, "StationId({})", self.0)
        }
    }
}

impl Serialize for StationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0 as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        assert_eq!(StationId::new(42).index(), 42);
    }

    #[test]
    fn sentinel_is_distinct_from_any_real_id() {
        assert!(StationId::SENTINEL.is_sentinel());
        assert!(!StationId::new(0).is_sentinel());
        assert!(!StationId::new(usize::MAX - 1).is_sentinel());
    }

    #[test]
    fn ordering_matches_raw_index() {
        assert!(StationId::new(1) < StationId::new(2));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::new(7));
        assert!(set.contains(&StationId::new(7)));
        assert!(!set.contains(&StationId::new(8)));
    }

    #[test]
    fn display_marks_sentinel() {
        assert_eq!(format!("{}", StationId::SENTINEL), "StationId(sentinel)");
        assert_eq!(format!("{}", StationId::new(5)), "StationId(5)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(i in 0usize..usize::MAX - 1) {
            prop_assert_eq!(StationId::new(i).index(), i);
        }

        #[test]
        fn only_usize_max_is_sentinel(i in 0usize..usize::MAX - 1) {
            prop_assert!(!StationId::new(i).is_sentinel());
        }
    }
}
