//! Geographic position of a stop.

use geo::Point;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Serialized as `{"lat": .., "lon": ..}`, the shape of a stop entry in the
/// persisted network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
