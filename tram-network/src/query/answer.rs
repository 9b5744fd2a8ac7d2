//! Query results.

use std::fmt;

use crate::domain::LineId;

/// Outcome of answering one command.
///
/// The two failure variants are values, not errors: the dialogue prints
/// every variant the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Matching lines in numeric order
    Lines(Vec<LineId>),

    /// Travel time along a line
    Minutes(u32),

    /// Great-circle distance in kilometres
    Distance(f64),

    /// The command shape was recognised but names an unknown stop or line
    UnknownArguments,

    /// No query rule matches the command
    UnrecognizedQuery,
}

impl Answer {
    /// Whether this is one of the two failure variants.
    pub fn is_error(&self) -> bool {
        matches!(self, Answer::UnknownArguments | Answer::UnrecognizedQuery)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Lines(lines) if lines.is_empty() => write!(f, "no lines"),
            Answer::Lines(lines) => {
                let ids: Vec<&str> = lines.iter().map(LineId::as_str).collect();
                write!(f, "{}", ids.join(", "))
            }
            Answer::Minutes(minutes) => write!(f, "{minutes} minutes"),
            Answer::Distance(km) => write!(f, "{km:.3} km"),
            Answer::UnknownArguments => write!(f, "unknown arguments"),
            Answer::UnrecognizedQuery => write!(f, "sorry, try again"),
        }
    }
}
