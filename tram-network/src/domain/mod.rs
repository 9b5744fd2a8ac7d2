//! Domain types for the tram network.
//!
//! Small value types shared by the parser, the compiler and the query
//! engine. Each enforces its invariants at construction time.

mod coordinates;
mod line_id;
mod time;

pub use coordinates::Coordinates;
pub use line_id::LineId;
pub use time::{ClockTime, TimeError};
