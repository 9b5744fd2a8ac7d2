//! Stop coordinate table.
//!
//! The raw stop source maps each stop name to a record whose `position`
//! field holds `[lat, lon]`. Positions may be JSON numbers or numeric
//! strings; both are accepted.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::Coordinates;

/// Stop name → position.
pub type StopTable = BTreeMap<String, Coordinates>;

/// A stop record whose position is missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates for stop {stop:?}: {reason}")]
pub struct InvalidCoordinateError {
    pub stop: String,
    pub reason: &'static str,
}

impl InvalidCoordinateError {
    fn new(stop: &str, reason: &'static str) -> Self {
        Self {
            stop: stop.to_string(),
            reason,
        }
    }
}

/// Build the stop table from raw position records.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use serde_json::json;
/// use tram_network::stops::build_stop_table;
///
/// let raw: BTreeMap<String, _> =
///     [("Chalmers".to_string(), json!({"position": ["57.6899", 11.9727]}))].into();
/// let table = build_stop_table(raw).unwrap();
/// assert_eq!(table["Chalmers"].lat, 57.6899);
/// assert_eq!(table["Chalmers"].lon, 11.9727);
/// ```
pub fn build_stop_table(
    raw: impl IntoIterator<Item = (String, Value)>,
) -> Result<StopTable, InvalidCoordinateError> {
    raw.into_iter()
        .map(|(name, record)| {
            let coordinates = parse_record(&name, &record)?;
            Ok((name, coordinates))
        })
        .collect()
}

fn parse_record(name: &str, record: &Value) -> Result<Coordinates, InvalidCoordinateError> {
    let position = record
        .as_object()
        .ok_or_else(|| InvalidCoordinateError::new(name, "record is not an object"))?
        .get("position")
        .ok_or_else(|| InvalidCoordinateError::new(name, "missing position"))?
        .as_array()
        .ok_or_else(|| InvalidCoordinateError::new(name, "position is not an array"))?;

    let [lat, lon, ..] = position.as_slice() else {
        return Err(InvalidCoordinateError::new(
            name,
            "position needs latitude and longitude",
        ));
    };

    let lat =
        coerce(lat).ok_or_else(|| InvalidCoordinateError::new(name, "latitude is not a number"))?;
    let lon =
        coerce(lon).ok_or_else(|| InvalidCoordinateError::new(name, "longitude is not a number"))?;

    Ok(Coordinates::new(lat, lon))
}

/// Read a finite float from a JSON number or numeric string.
fn coerce(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: Vec<(&str, Value)>) -> Vec<(String, Value)> {
        entries
            .into_iter()
            .map(|(name, v)| (name.to_string(), v))
            .collect()
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let table = build_stop_table(raw(vec![
            ("Chalmers", json!({"position": [57.6899, 11.9727]})),
            ("Korsvägen", json!({"position": ["57.6967", "11.9870"]})),
        ]))
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["Chalmers"], Coordinates::new(57.6899, 11.9727));
        assert_eq!(table["Korsvägen"], Coordinates::new(57.6967, 11.987));
    }

    #[test]
    fn ignores_extra_fields() {
        let table = build_stop_table(raw(vec![(
            "Chalmers",
            json!({"position": [57.6899, 11.9727], "town": "Göteborg"}),
        )]))
        .unwrap();

        assert_eq!(table["Chalmers"].lat, 57.6899);
    }

    #[test]
    fn missing_position() {
        let err = build_stop_table(raw(vec![("Chalmers", json!({"pos": [1, 2]}))])).unwrap_err();
        assert_eq!(err.stop, "Chalmers");
        assert_eq!(err.reason, "missing position");
    }

    #[test]
    fn short_position() {
        let err = build_stop_table(raw(vec![("A", json!({"position": [57.0]}))])).unwrap_err();
        assert_eq!(err.reason, "position needs latitude and longitude");
    }

    #[test]
    fn non_numeric_position() {
        let err =
            build_stop_table(raw(vec![("A", json!({"position": ["north", 11.0]}))])).unwrap_err();
        assert_eq!(err.reason, "latitude is not a number");

        let err = build_stop_table(raw(vec![("A", json!({"position": [57.0, null]}))])).unwrap_err();
        assert_eq!(err.reason, "longitude is not a number");

        let err = build_stop_table(raw(vec![("A", json!({"position": ["NaN", 1.0]}))])).unwrap_err();
        assert_eq!(err.reason, "latitude is not a number");
    }

    #[test]
    fn record_not_object() {
        let err = build_stop_table(raw(vec![("A", json!([57.0, 11.0]))])).unwrap_err();
        assert_eq!(err.reason, "record is not an object");
    }

    #[test]
    fn error_display() {
        let err = InvalidCoordinateError::new("Chalmers", "missing position");
        assert_eq!(
            err.to_string(),
            "invalid coordinates for stop \"Chalmers\": missing position"
        );
    }

    #[test]
    fn empty_source() {
        assert!(build_stop_table(Vec::new()).unwrap().is_empty());
    }
}
