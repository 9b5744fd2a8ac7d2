//! Line identifier type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A line code such as `"1"` or `"10"`.
///
/// Line codes are digit strings of unequal length, so they order by numeric
/// value rather than lexicographically. Codes that are not numbers sort after
/// all numeric ones, in string order.
///
/// # Examples
///
/// ```
/// use tram_network::domain::LineId;
///
/// let mut ids: Vec<LineId> = ["10", "2", "3"].into_iter().map(LineId::from).collect();
/// ids.sort();
/// let ids: Vec<&str> = ids.iter().map(LineId::as_str).collect();
/// assert_eq!(ids, ["2", "3", "10"]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Create a line id from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the code, if it is a plain unsigned number.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for LineId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for LineId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for LineId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LineId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
