//! Consistency checks over a compiled network.
//!
//! None of these run automatically on load; the `check` command and the
//! tests call them to flag data-entry problems.

use crate::distance::DistanceProvider;
use crate::domain::LineId;

use super::{Network, NetworkError};

/// Two stops that are further apart than any real network allows.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplausibleDistance {
    pub from: String,
    pub to: String,
    pub km: f64,
}

/// Findings of every consistency check over one network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// `(line, stop)` references to stops without coordinates
    pub dangling: Vec<(LineId, String)>,

    /// Stop pairs beyond the distance bound
    pub implausible: Vec<ImplausibleDistance>,

    /// `(from, to)` segments with no reverse time
    pub one_way: Vec<(String, String)>,
}

impl CheckReport {
    /// A network is consistent when every referenced stop has coordinates.
    /// Far-apart pairs and one-way segments are warnings only.
    pub fn is_consistent(&self) -> bool {
        self.dangling.is_empty()
    }
}

impl Network {
    /// Every `(line, stop)` where the line names a stop missing from the
    /// stop table, in line order.
    pub fn dangling_stops(&self) -> Vec<(&LineId, &str)> {
        self.lines
            .iter()
            .flat_map(|(line, stops)| {
                stops
                    .iter()
                    .filter(move |stop| !self.stops.contains_key(stop.as_str()))
                    .map(move |stop| (line, stop.as_str()))
            })
            .collect()
    }

    /// Check that every stop a line references has coordinates.
    pub fn validate(&self) -> Result<(), NetworkError> {
        match self.dangling_stops().first() {
            Some((line, stop)) => Err(NetworkError::UnknownStop {
                line: (*line).clone(),
                stop: stop.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Segments recorded in one direction only, as `(from, to)`.
    ///
    /// The time table is first-writer-wins and never symmetrised, so these
    /// are expected; the list is informational.
    pub fn missing_reverse_times(&self) -> Vec<(&str, &str)> {
        self.times
            .iter()
            .flat_map(|(from, targets)| {
                targets
                    .keys()
                    .filter(move |to| self.segment_time(to, from).is_none())
                    .map(move |to| (from.as_str(), to.as_str()))
            })
            .collect()
    }

    /// Run every check, flagging stop pairs further apart than `bound_km`.
    pub fn check<D: DistanceProvider>(&self, provider: &D, bound_km: f64) -> CheckReport {
        CheckReport {
            dangling: self
                .dangling_stops()
                .into_iter()
                .map(|(line, stop)| (line.clone(), stop.to_string()))
                .collect(),
            implausible: self.implausible_distances(provider, bound_km),
            one_way: self
                .missing_reverse_times()
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Stop pairs whose distance exceeds `bound_km`.
    ///
    /// Each unordered pair is reported once, with `from` sorting before `to`.
    pub fn implausible_distances<D: DistanceProvider>(
        &self,
        provider: &D,
        bound_km: f64,
    ) -> Vec<ImplausibleDistance> {
        let stops: Vec<_> = self.stops.iter().collect();
        let stops = stops.as_slice();

        stops
            .iter()
            .enumerate()
            .flat_map(move |(i, &(from, a))| {
                stops[i + 1..].iter().filter_map(move |&(to, b)| {
                    let km = provider.distance_km(*a, *b);
                    (km > bound_km).then(|| ImplausibleDistance {
                        from: from.clone(),
                        to: to.clone(),
                        km,
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{LINES, STOPS};
    use super::*;
    use crate::distance::Haversine;
    use crate::domain::Coordinates;

    #[test]
    fn consistent_network_validates() {
        let network = Network::compile(STOPS, LINES).unwrap();

        assert!(network.dangling_stops().is_empty());
        assert!(network.validate().is_ok());
    }

    #[test]
    fn every_line_stop_exists() {
        let network = Network::compile(STOPS, LINES).unwrap();

        for stops in network.lines.values() {
            for stop in stops {
                assert!(network.stops.contains_key(stop), "{stop} not in stops");
            }
        }
    }

    #[test]
    fn reports_dangling_stops() {
        let lines = "2:\nChalmers 10:00\nNowhere 10:05\n3:\nElsewhere 11:00\n";
        let network = Network::compile(STOPS, lines).unwrap();

        let dangling = network.dangling_stops();
        assert_eq!(
            dangling,
            [
                (&LineId::from("2"), "Nowhere"),
                (&LineId::from("3"), "Elsewhere")
            ]
        );

        match network.validate().unwrap_err() {
            NetworkError::UnknownStop { line, stop } => {
                assert_eq!(line, LineId::from("2"));
                assert_eq!(stop, "Nowhere");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn one_directional_segments() {
        let network = Network::compile(STOPS, LINES).unwrap();
        let missing = network.missing_reverse_times();

        // Line 7 and 10 overlap between Korsvägen and Valand in opposite directions
        assert!(!missing.contains(&("Korsvägen", "Valand")));
        assert!(!missing.contains(&("Valand", "Korsvägen")));
        assert!(missing.contains(&("Chalmers", "Korsvägen")));
        assert!(missing.contains(&("Kungsportsplatsen", "Valand")));
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn city_stops_are_within_bound() {
        let network = Network::compile(STOPS, LINES).unwrap();
        assert!(network.implausible_distances(&Haversine, 20.0).is_empty());
    }

    #[test]
    fn far_stop_is_flagged_once() {
        let mut network = Network::compile(STOPS, LINES).unwrap();
        network
            .stops
            .insert("Stockholm".into(), Coordinates::new(59.3293, 18.0686));

        let flagged = network.implausible_distances(&Haversine, 20.0);
        assert_eq!(flagged.len(), 4);
        assert!(flagged.iter().all(|d| d.to == "Stockholm" || d.from == "Stockholm"));
        assert!(flagged.iter().all(|d| d.km > 300.0));
    }

    #[test]
    fn check_collects_every_finding() {
        let lines = "7:\nChalmers 10:00\nNowhere 10:05\n";
        let mut network = Network::compile(STOPS, lines).unwrap();
        network
            .stops
            .insert("Stockholm".into(), Coordinates::new(59.3293, 18.0686));

        let report = network.check(&Haversine, 20.0);
        assert!(!report.is_consistent());
        assert_eq!(report.dangling, [(LineId::from("7"), "Nowhere".to_string())]);
        assert_eq!(report.implausible.len(), 4);
        assert_eq!(
            report.one_way,
            [("Chalmers".to_string(), "Nowhere".to_string())]
        );
    }

    #[test]
    fn clean_network_checks_consistent() {
        let network = Network::compile(STOPS, LINES).unwrap();
        let report = network.check(&Haversine, 20.0);

        assert!(report.is_consistent());
        assert!(report.implausible.is_empty());
        assert_eq!(report.one_way.len(), 2);
    }
}
