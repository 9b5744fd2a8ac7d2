//! Schedule text parsing.
//!
//! Turns the plain-text timetable (line headers followed by
//! `<stop name> HH:MM` entries) into ordered per-line stop lists and a
//! directed table of travel times between adjacent stops.

mod error;
mod parser;

pub use error::{MalformedScheduleError, MalformedScheduleKind};
pub use parser::{LineStops, Schedule, SegmentTimes, parse_schedule};
