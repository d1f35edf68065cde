//! Core data model: stations, lines, connections, footpaths, and the
//! per-station profile state the scan builds up.

mod connection;
mod error;
mod footpath;
mod journey;
mod line;
mod profile;
mod station;
mod time;

pub use connection::Connection;
pub use error::EngineError;
pub use footpath::{FootpathIndex, FootpathIndexBuilder};
pub use journey::{Journey, JourneyLeg};
pub use line::{LineId, TransportType};
pub use profile::{StationEntry, StationProfile};
pub use station::StationId;
pub use time::Time;
