//! The command-line operations, driven by a [`NetworkConfig`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::NetworkConfig;
use crate::distance::Haversine;
use crate::network::{CheckReport, Network, NetworkError};
use crate::query::QueryEngine;

/// Compile the raw sources and write the snapshot.
pub fn init(config: &NetworkConfig) -> Result<Network, NetworkError> {
    let network = Network::from_files(&config.stops_path, &config.lines_path)?;
    network.save(&config.network_path)?;
    Ok(network)
}

/// Load the snapshot into a query engine.
pub fn load_engine(config: &NetworkConfig) -> Result<QueryEngine, NetworkError> {
    let network = Network::load(&config.network_path)?;
    Ok(QueryEngine::new(Arc::new(network)))
}

/// Load the snapshot, run every consistency check and log the findings.
pub fn check(config: &NetworkConfig) -> Result<CheckReport, NetworkError> {
    let network = Network::load(&config.network_path)?;
    let report = network.check(&Haversine, config.max_distance_km);

    for (line, stop) in &report.dangling {
        warn!(line = %line, stop = %stop, "line references stop without coordinates");
    }
    for pair in &report.implausible {
        warn!(
            from = %pair.from,
            to = %pair.to,
            km = pair.km,
            bound_km = config.max_distance_km,
            "stops implausibly far apart"
        );
    }
    info!(
        segments = report.one_way.len(),
        "segments timed in one direction only"
    );
    if report.is_consistent() {
        info!("network is consistent");
    }

    Ok(report)
}
