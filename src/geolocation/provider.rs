use crate::geolocation::Position;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Source of the user's current position.
#[async_trait]
pub trait GeolocationProvider: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    async fn current_position(&self) -> Result<Position, GeolocationError>;
}

#[derive(Error, Debug)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
