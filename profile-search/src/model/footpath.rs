//! Inter-station footpaths.
//!
//! Unlike rail connections, walks carry no schedule and no probability —
//! just a duration. The index is directed and keyed by the walk's
//! *endpoint*, because the scan only ever needs "what walks end here,
//! and where do they start" during footpath relaxation (§4.2 step 9). If
//! the underlying data is symmetric, the caller inserts both directions;
//! this index does not assume or enforce symmetry.

use std::collections::HashMap;

use crate::model::StationId;

/// Directed incoming-footpath index: for each station, the walks that
/// end there.
///
/// # Examples
///
/// ```
/// use profile_search::model::{FootpathIndex, StationId};
///
/// let mut index = FootpathIndex::new();
/// index.add(StationId::new(0), StationId::new(1), 300);
///
/// let incoming = index.incoming(StationId::new(1));
/// assert_eq!(incoming, &[(StationId::new(0), 300)]);
/// assert!(index.incoming(StationId::new(0)).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FootpathIndex {
    incoming: HashMap<StationId, Vec<(StationId, i64)>>,
}

impl FootpathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a walk from `origin` to `endpoint` taking `walk_seconds`.
    /// Queryable afterwards via [`FootpathIndex::incoming`] on `endpoint`.
    pub fn add(&mut self, origin: StationId, endpoint: StationId, walk_seconds: i64) {
        self.incoming
            .entry(endpoint)
            .or_default()
            .push((origin, walk_seconds));
    }

    /// The walks ending at `station`, as `(origin, walk_seconds)` pairs.
    /// Empty (not an error) for a station with no incoming walks.
    pub fn incoming(&self, station: StationId) -> &[(StationId, i64)] {
        self.incoming
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.values().all(Vec::is_empty)
    }

    /// Every station id mentioned by this index, as either a walk
    /// endpoint or a walk origin. Used by the engine to size its dense
    /// station table, since footpaths may reference stations that never
    /// appear as a connection endpoint.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.incoming
            .iter()
            .flat_map(|(endpoint, origins)| std::iter::once(*endpoint).chain(origins.iter().map(|(origin, _)| *origin)))
    }
}

/// Fluent builder for [`FootpathIndex`], mirroring symmetric walk data
/// (two calls to [`FootpathIndexBuilder::symmetric`] cover both
/// directions in one line) as well as one-way entries via
/// [`FootpathIndexBuilder::add`].
#[derive(Debug, Default)]
pub struct FootpathIndexBuilder {
    inner: FootpathIndex,
}

impl FootpathIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, origin: StationId, endpoint: StationId, walk_seconds: i64) -> Self {
        self.inner.add(origin, endpoint, walk_seconds);
        self
    }

    /// Registers the walk in both directions, for data sources that only
    /// record one undirected pair per walkable station pair.
    pub fn symmetric(mut self, a: StationId, b: StationId, walk_seconds: i64) -> Self {
        self.inner.add(a, b, walk_seconds);
        self.inner.add(b, a, walk_seconds);
        self
    }

    pub fn build(self) -> FootpathIndex {
        self.inner
    }
}
