//! JSON snapshot of a compiled network.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use super::{Network, NetworkError};

impl Network {
    /// Serialize to the snapshot format.
    ///
    /// Output is pretty-printed with a four-space indent and keeps
    /// non-ASCII stop names verbatim. All tables are ordered maps, so the
    /// same network always produces the same bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, NetworkError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Deserialize from the snapshot format.
    pub fn from_json(bytes: &[u8]) -> Result<Self, NetworkError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Write the snapshot to disk.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetworkError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| NetworkError::io(parent, e))?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| NetworkError::io(path, e))?;

        info!(path = %path.display(), "network snapshot written");
        Ok(())
    }

    /// Read a snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| NetworkError::io(path, e))?;
        let network = Self::from_json(&bytes)?;

        info!(
            path = %path.display(),
            stops = network.stops.len(),
            lines = network.lines.len(),
            "network snapshot loaded"
        );
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{LINES, STOPS};
    use super::*;
    use crate::domain::LineId;
    use tempfile::tempdir;

    #[test]
    fn snapshot_shape() {
        let network = Network::compile(
            r#"{"A": {"position": [1.5, 2.5]}, "B": {"position": [3, 4]}}"#,
            "1:\nA 08:00\nB 08:05\n",
        )
        .unwrap();

        let json = String::from_utf8(network.to_json().unwrap()).unwrap();
        let expected = r#"{
    "stops": {
        "A": {
            "lat": 1.5,
            "lon": 2.5
        },
        "B": {
            "lat": 3.0,
            "lon": 4.0
        }
    },
    "lines": {
        "1": [
            "A",
            "B"
        ]
    },
    "times": {
        "A": {
            "B": 5
        }
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn keeps_non_ascii_names() {
        let network = Network::compile(STOPS, LINES).unwrap();
        let json = String::from_utf8(network.to_json().unwrap()).unwrap();
        assert!(json.contains("\"Korsvägen\""));
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let first = Network::compile(STOPS, LINES).unwrap().to_json().unwrap();
        let second = Network::compile(STOPS, LINES).unwrap().to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lines_serialize_in_numeric_order() {
        let network = Network::compile(STOPS, LINES).unwrap();
        let json = String::from_utf8(network.to_json().unwrap()).unwrap();

        let seven = json.find("\"7\": [").unwrap();
        let ten = json.find("\"10\": [").unwrap();
        assert!(seven < ten);
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tramnetwork.json");
        let network = Network::compile(STOPS, LINES).unwrap();

        network.save(&path).unwrap();
        let loaded = Network::load(&path).unwrap();

        assert_eq!(loaded, network);
        assert_eq!(
            loaded.line_stops(&LineId::from("10")).unwrap(),
            ["Kungsportsplatsen", "Valand", "Korsvägen"]
        );
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("tramnetwork.json");

        Network::compile(STOPS, LINES).unwrap().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_preserves_inconsistency() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tramnetwork.json");
        let network = Network::compile(STOPS, "1:\nChalmers 10:00\nNowhere 10:05\n").unwrap();

        network.save(&path).unwrap();
        let loaded = Network::load(&path).unwrap();

        assert_eq!(loaded.dangling_stops().len(), 1);
    }

    #[test]
    fn load_missing_file() {
        let err = Network::load("/nonexistent/path/tramnetwork.json").unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }

    #[test]
    fn load_rejects_bad_json() {
        let err = Network::from_json(br#"{"stops": {}}"#).unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }
}
