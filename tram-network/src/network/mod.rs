//! Compiled tram network.
//!
//! A [`Network`] joins the stop coordinate table with the parsed schedule.
//! It is built once, optionally persisted as a JSON snapshot, and then only
//! read. Cross-reference problems (a line naming a stop with no
//! coordinates) are logged at compile time and kept in the snapshot so
//! [`Network::validate`] can report them later.

mod error;
mod persist;
mod validate;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{Coordinates, LineId};
use crate::schedule::{LineStops, Schedule, SegmentTimes, parse_schedule};
use crate::stops::{StopTable, build_stop_table};

pub use error::NetworkError;
pub use validate::{CheckReport, ImplausibleDistance};

/// Stops, lines and segment times of a tram network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Stop name → position.
    pub stops: StopTable,

    /// Line → ordered stop names.
    pub lines: LineStops,

    /// Directed travel minutes between adjacent stops.
    pub times: SegmentTimes,
}

impl Network {
    /// Assemble a network from an already-built stop table and schedule.
    pub fn new(stops: StopTable, schedule: Schedule) -> Self {
        Self {
            stops,
            lines: schedule.lines,
            times: schedule.times,
        }
    }

    /// Compile a network from the raw stop JSON and schedule text.
    ///
    /// Fails on the first malformed coordinate record or schedule line.
    /// Lines referencing stops without coordinates are not an error here;
    /// each one is logged and preserved.
    pub fn compile(stops_source: &str, schedule_source: &str) -> Result<Self, NetworkError> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(stops_source)?;
        let stops = build_stop_table(raw)?;
        let schedule = parse_schedule(schedule_source)?;

        let network = Self::new(stops, schedule);

        for (line, stop) in network.dangling_stops() {
            warn!(line = %line, stop, "line references stop without coordinates");
        }

        info!(
            stops = network.stops.len(),
            lines = network.lines.len(),
            "network compiled"
        );

        Ok(network)
    }

    /// Compile a network from source files on disk.
    pub fn from_files(
        stops_path: impl AsRef<Path>,
        lines_path: impl AsRef<Path>,
    ) -> Result<Self, NetworkError> {
        let stops_path = stops_path.as_ref();
        let lines_path = lines_path.as_ref();

        let stops_source = std::fs::read_to_string(stops_path)
            .map_err(|e| NetworkError::io(stops_path, e))?;
        let schedule_source = std::fs::read_to_string(lines_path)
            .map_err(|e| NetworkError::io(lines_path, e))?;

        Self::compile(&stops_source, &schedule_source)
    }

    /// Position of a stop.
    pub fn coordinates(&self, stop: &str) -> Option<Coordinates> {
        self.stops.get(stop).copied()
    }

    /// Whether the stop table knows this stop.
    pub fn has_stop(&self, stop: &str) -> bool {
        self.stops.contains_key(stop)
    }

    /// Ordered stops of a line.
    pub fn line_stops(&self, line: &LineId) -> Option<&[String]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    /// Recorded travel time from one stop to the next.
    pub fn segment_time(&self, from: &str, to: &str) -> Option<u32> {
        self.times.get(from)?.get(to).copied()
    }
}
