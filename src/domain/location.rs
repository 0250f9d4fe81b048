use crate::domain::Coordinate;
use serde::Deserialize;

/// A named place as delivered by the location data source.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl Location {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, lat: f64, long: f64) -> Self {
        Location {
            name: name.into(),
            lat,
            long,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.long)
    }
}
