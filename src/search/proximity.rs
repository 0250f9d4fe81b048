use crate::domain::{Coordinate, Location};
use ordered_float::OrderedFloat;

/// Planar distance between two coordinates, treating degrees as cartesian units.
/// Only useful for coarse relative ordering, not as a geodesic distance.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = a.lat - b.lat;
    let dy = a.long - b.long;
    (dx * dx + dy * dy).sqrt()
}

/// Orders locations by ascending distance to `reference`. Equidistant locations keep their input order.
pub fn sort(mut locations: Vec<Location>, reference: Coordinate) -> Vec<Location> {
    locations.sort_by_cached_key(|location| OrderedFloat(distance(reference, location.coordinate())));
    locations
}
