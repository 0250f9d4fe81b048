use crate::domain::Coordinate;
use crate::domain::events::Event;
use crate::geolocation::{GeolocationError, GeolocationProvider};
use crate::locations::fetch_locations;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info, instrument, warn};

/// Fetches the location list and the user's position in the background and reports both to the store.
///
/// Neither operation retries. A failure is logged and leaves the store's state as it was.
#[derive(Debug)]
pub struct LocationStore {
    client: Client,
    url: String,
    provider: Option<Arc<dyn GeolocationProvider>>,
    tx: Sender<Event>,
}

impl LocationStore {
    pub fn new(client: Client, url: impl Into<String>, provider: Option<Arc<dyn GeolocationProvider>>, tx: Sender<Event>) -> Self {
        LocationStore {
            client,
            url: url.into(),
            provider,
            tx,
        }
    }

    pub fn load(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        let url = self.url.clone();
        let tx = self.tx.clone();

        task::spawn(async move {
            match fetch_locations(&client, &url).await {
                Ok(locations) => {
                    if tx.send(Event::LocationsLoaded(locations)).await.is_err() {
                        debug!("🌍 Dropping loaded locations, the store is gone");
                    }
                }
                Err(e) => warn!("⚠️ Unable to load locations: {}", e),
            }
        })
    }

    pub fn locate_user(&self) -> JoinHandle<()> {
        let provider = self.provider.clone();
        let tx = self.tx.clone();

        task::spawn(async move {
            match locate(provider.as_deref()).await {
                Ok(coordinate) => {
                    if tx.send(Event::UserLocated(coordinate)).await.is_err() {
                        debug!("📍 Dropping user location, the store is gone");
                    }
                }
                Err(e) => warn!("⚠️ Unable to locate the user: {}", e),
            }
        })
    }
}

#[instrument(skip_all, fields(provider = provider.map(|p| p.id()).unwrap_or("<none>")))]
async fn locate(provider: Option<&dyn GeolocationProvider>) -> Result<Coordinate, GeolocationError> {
    let provider = provider.ok_or(GeolocationError::Unsupported)?;

    info!("📍 Locating user...");
    let position = provider.current_position().await?;
    let coordinate = Coordinate::from(position);
    info!("📍 Locating user... OK, at {}, {}", coordinate.lat, coordinate.long);

    Ok(coordinate)
}
