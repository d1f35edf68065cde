//! Line identifiers and transport categories.

use std::fmt;

use serde::Serialize;

/// The identifier of the line/trip a connection runs on.
///
/// Two special shapes matter to the engine: the empty string is the
/// "sentinel" arrival marker used by the scan's synthetic terminal
/// connection at the destination station, and ids prefixed `foot:` are
/// minted for synthetic footpath connections created while relaxing
/// walks during the scan.
///
/// # Examples
///
/// ```
/// use profile_search::model::LineId;
///
/// let sentinel = LineId::sentinel();
/// assert!(sentinel.is_sentinel());
///
/// let foot = LineId::footpath(3);
/// assert!(foot.is_footpath());
/// assert_eq!(foot.as_str(), "foot:3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineId(String);

const FOOTPATH_PREFIX: &str = "foot:";

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The sentinel arrival-marker id (empty string).
    pub fn sentinel() -> Self {
        Self(String::new())
    }

    /// Mints a synthetic footpath line id scoped to one `find()` call's
    /// walk counter.
    pub fn footpath(counter: u64) -> Self {
        Self(format!("{FOOTPATH_PREFIX}{counter}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_sentinel(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_footpath(&self) -> bool {
        self.0.starts_with(FOOTPATH_PREFIX)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("<sentinel>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl Serialize for LineId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// The mode of transport a connection runs on.
///
/// Matches the categorical vocabulary of the source timetable data:
/// scheduled bus, train ("Zug"), tram, boat ("Schiff"), plus the
/// synthetic `Foot` category for footpath connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportType {
    Bus,
    Zug,
    Tram,
    Schiff,
    Foot,
}

impl Serialize for TransportType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl TransportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Bus => "bus",
            TransportType::Zug => "zug",
            TransportType::Tram => "tram",
            TransportType::Schiff => "schiff",
            TransportType::Foot => "foot",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
