//! Default locations and limits for the command-line tool.

use std::path::PathBuf;

/// Configuration for building, checking and querying a network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Raw stop positions (JSON).
    pub stops_path: PathBuf,

    /// Raw schedule text.
    pub lines_path: PathBuf,

    /// Compiled network snapshot.
    pub network_path: PathBuf,

    /// Largest distance between two stops of one city network (km).
    /// Pairs further apart are reported as likely data-entry errors.
    pub max_distance_km: f64,

    /// Command that ends the dialogue.
    pub exit_keyword: String,
}

impl NetworkConfig {
    /// Set the raw stop positions file.
    pub fn with_stops_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stops_path = path.into();
        self
    }

    /// Set the raw schedule file.
    pub fn with_lines_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lines_path = path.into();
        self
    }

    /// Set the snapshot file.
    pub fn with_network_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.network_path = path.into();
        self
    }

    /// Set the plausibility bound for stop distances.
    pub fn with_max_distance_km(mut self, km: f64) -> Self {
        self.max_distance_km = km;
        self
    }

    /// Set the dialogue exit command.
    pub fn with_exit_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.exit_keyword = keyword.into();
        self
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            stops_path: PathBuf::from("tramstops.json"),
            lines_path: PathBuf::from("tramlines.txt"),
            network_path: PathBuf::from("tramnetwork.json"),
            max_distance_km: 20.0,
            exit_keyword: "quit".to_string(),
        }
    }
}
