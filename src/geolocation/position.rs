use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// A position fix as reported by a geolocation provider.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Position {
    pub coords: Coords,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coords {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            coords: Coords { latitude, longitude },
        }
    }
}

impl From<Position> for Coordinate {
    fn from(position: Position) -> Self {
        Coordinate::new(position.coords.latitude, position.coords.longitude)
    }
}

impl<'de> Deserialize<'de> for Coords {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        validate(inner.latitude, inner.longitude).map_err(Error::custom)?;

        Ok(Coords {
            latitude: inner.latitude,
            longitude: inner.longitude,
        })
    }
}

pub fn validate(latitude: f64, longitude: f64) -> Result<(), String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("invalid latitude: {}, must be between -90 and 90", latitude));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("invalid longitude: {}, must be between -180 and 180", longitude));
    }

    Ok(())
}
