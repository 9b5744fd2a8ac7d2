//! Query resolution against a compiled network.

use std::sync::Arc;

use tracing::debug;

use crate::distance::{DistanceProvider, Haversine};
use crate::domain::LineId;
use crate::network::Network;

use super::answer::Answer;
use super::parse::Query;

/// Why a travel time could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TravelTimeError {
    /// The line is not in the network
    #[error("unknown line {0}")]
    UnknownLine(LineId),

    /// A stop is not on the line's stop list
    #[error("stop {stop:?} is not on line {line}")]
    StopNotOnLine { line: LineId, stop: String },

    /// Adjacent stops have no recorded segment time
    #[error("no segment time from {from:?} to {to:?}")]
    MissingSegment { from: String, to: String },
}

/// Answers commands against a shared, read-only network.
#[derive(Debug, Clone)]
pub struct QueryEngine<D = Haversine> {
    network: Arc<Network>,
    distance: D,
}

impl QueryEngine<Haversine> {
    /// Create an engine using haversine distances.
    pub fn new(network: Arc<Network>) -> Self {
        Self::with_provider(network, Haversine)
    }
}

impl<D: DistanceProvider> QueryEngine<D> {
    /// Create an engine with a custom distance provider.
    pub fn with_provider(network: Arc<Network>, distance: D) -> Self {
        Self { network, distance }
    }

    /// The network being queried.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Parse and answer one command.
    pub fn answer(&self, command: &str) -> Answer {
        match Query::parse(command) {
            Some(query) => self.resolve(&query),
            None => {
                debug!(command, "unrecognised query");
                Answer::UnrecognizedQuery
            }
        }
    }

    /// Answer an already-parsed query.
    ///
    /// Any stop or line the query names must exist in the network,
    /// otherwise the answer is [`Answer::UnknownArguments`].
    pub fn resolve(&self, query: &Query) -> Answer {
        let known = |stop: &String| self.network.has_stop(stop);

        match query {
            Query::Via { stop } if known(stop) => Answer::Lines(self.lines_via_stop(stop)),
            Query::Between { first, second } if known(first) && known(second) => {
                Answer::Lines(self.lines_between_stops(first, second))
            }
            Query::Time { line, from, to }
                if self.network.lines.contains_key(line) && known(from) && known(to) =>
            {
                match self.time_between_stops(line, from, to) {
                    Ok(minutes) => Answer::Minutes(minutes),
                    Err(error) => {
                        debug!(%error, "travel time unavailable");
                        Answer::UnknownArguments
                    }
                }
            }
            Query::Distance { from, to } => match self.distance_between_stops(from, to) {
                Some(km) => Answer::Distance(km),
                None => Answer::UnknownArguments,
            },
            _ => {
                debug!(?query, "query references unknown stop or line");
                Answer::UnknownArguments
            }
        }
    }

    /// Lines whose stop list contains `stop`, in numeric order.
    pub fn lines_via_stop(&self, stop: &str) -> Vec<LineId> {
        self.lines_matching(|stops| stops.iter().any(|s| s == stop))
    }

    /// Lines whose stop list contains both stops, in numeric order.
    pub fn lines_between_stops(&self, first: &str, second: &str) -> Vec<LineId> {
        self.lines_matching(|stops| {
            stops.iter().any(|s| s == first) && stops.iter().any(|s| s == second)
        })
    }

    /// Minutes to ride `line` between two of its stops, in either direction.
    ///
    /// The span is always walked forward along the line's stop order, so
    /// the result does not depend on which stop is given first.
    pub fn time_between_stops(
        &self,
        line: &LineId,
        from: &str,
        to: &str,
    ) -> Result<u32, TravelTimeError> {
        let stops = self
            .network
            .line_stops(line)
            .ok_or_else(|| TravelTimeError::UnknownLine(line.clone()))?;

        let position = |stop: &str| {
            stops
                .iter()
                .position(|s| s == stop)
                .ok_or_else(|| TravelTimeError::StopNotOnLine {
                    line: line.clone(),
                    stop: stop.to_string(),
                })
        };

        let (mut start, mut end) = (position(from)?, position(to)?);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        stops[start..=end]
            .windows(2)
            .map(|pair| {
                self.network
                    .segment_time(&pair[0], &pair[1])
                    .ok_or_else(|| TravelTimeError::MissingSegment {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                    })
            })
            .sum()
    }

    /// Great-circle kilometres between two stops, or `None` if either is
    /// unknown.
    pub fn distance_between_stops(&self, from: &str, to: &str) -> Option<f64> {
        let a = self.network.coordinates(from)?;
        let b = self.network.coordinates(to)?;
        Some(self.distance.distance_km(a, b))
    }

    fn lines_matching(&self, predicate: impl Fn(&[String]) -> bool) -> Vec<LineId> {
        // Map keys are already in numeric line order
        self.network
            .lines
            .iter()
            .filter(|(_, stops)| predicate(stops.as_slice()))
            .map(|(line, _)| line.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
