use crate::app_config::AppConfig;
use crate::geolocation::provider_from_config;
use crate::input::read_input;
use crate::location_search::LocationSearch;
use crate::locations::new_client;
use crate::view_listener::view_listener;
use tokio::io::BufReader;
use tokio::task;
use tracing::{info, warn};

mod app_config;
mod domain;
mod geolocation;
mod input;
mod location_search;
mod locations;
mod render;
mod search;
mod store;
mod view_listener;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.core().log_level())
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let client = new_client()?;
    let provider = provider_from_config(config.geolocation(), &client);
    if provider.is_none() {
        warn!("⚠️ No geolocation provider configured, the user cannot be located");
    }

    let mut component = LocationSearch::mount(client, &config, provider);

    let view_rx = component.view();
    task::spawn(async move {
        view_listener(view_rx, &mut tokio::io::stdout()).await;
    });
    info!("✅  Initialized view listener");
    info!("🔥 {} is up and running, type to search", env!("CARGO_PKG_NAME"));

    read_input(BufReader::new(tokio::io::stdin()), |line| component.input(line)).await;

    component.unmount();
    Ok(())
}
