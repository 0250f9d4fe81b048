mod http_provider;
mod position;
mod provider;
mod static_provider;

use crate::app_config::Geolocation;
use reqwest::Client;
use std::sync::Arc;

pub use http_provider::HttpProvider;
pub use position::Position;
pub use provider::{GeolocationError, GeolocationProvider};
pub use static_provider::StaticProvider;

/// Builds the configured provider, `None` when locating the user is not supported.
pub fn provider_from_config(config: Option<&Geolocation>, client: &Client) -> Option<Arc<dyn GeolocationProvider>> {
    match config? {
        Geolocation::Static { latitude, longitude } => Some(Arc::new(StaticProvider::new(*latitude, *longitude))),
        Geolocation::Http { url } => Some(Arc::new(HttpProvider::new(client.clone(), url.clone()))),
    }
}
