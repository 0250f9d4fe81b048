use crate::geolocation::position::validate;
use crate::geolocation::{GeolocationError, GeolocationProvider, Position};
use async_trait::async_trait;

pub const PROVIDER_ID: &str = "static";

/// Reports a fixed, configured position.
#[derive(Debug)]
pub struct StaticProvider {
    position: Position,
}

impl StaticProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        StaticProvider {
            position: Position::new(latitude, longitude),
        }
    }
}

#[async_trait]
impl GeolocationProvider for StaticProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn current_position(&self) -> Result<Position, GeolocationError> {
        let coords = &self.position.coords;
        validate(coords.latitude, coords.longitude).map_err(GeolocationError::InvalidPosition)?;
        Ok(self.position.clone())
    }
}
