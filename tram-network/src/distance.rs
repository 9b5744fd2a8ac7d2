//! Great-circle distance between stops.

use geo::HaversineDistance;

use crate::domain::Coordinates;

/// Source of geodesic distances.
///
/// The query engine only needs "how far apart are these two points", so it
/// is generic over this trait and tests can substitute a fixed table.
pub trait DistanceProvider {
    /// Distance between two points in kilometres.
    fn distance_km(&self, a: Coordinates, b: Coordinates) -> f64;
}

/// Haversine distance on a spherical Earth (mean radius).
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceProvider for Haversine {
    fn distance_km(&self, a: Coordinates, b: Coordinates) -> f64 {
        a.to_point().haversine_distance(&b.to_point()) / 1000.0
    }
}
