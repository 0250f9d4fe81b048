use crate::geolocation::{GeolocationError, GeolocationProvider, Position};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

pub const PROVIDER_ID: &str = "http";

/// Asks a remote endpoint for the position, expecting `{ "coords": { "latitude", "longitude" } }`.
#[derive(Debug)]
pub struct HttpProvider {
    client: Client,
    url: String,
}

impl HttpProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        HttpProvider { client, url: url.into() }
    }
}

#[async_trait]
impl GeolocationProvider for HttpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn current_position(&self) -> Result<Position, GeolocationError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(body = body.trim(), "📍 Received position");

        serde_json::from_str::<Position>(&body).map_err(|e| GeolocationError::InvalidPosition(e.to_string()))
    }
}
