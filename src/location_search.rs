use crate::app_config::AppConfig;
use crate::domain::View;
use crate::domain::events::Event;
use crate::geolocation::GeolocationProvider;
use crate::locations::LocationStore;
use crate::search::Debouncer;
use crate::store::Store;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::watch::Receiver as WatchReceiver;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info};

/// The mounted search component.
///
/// Mounting starts the store and kicks off loading the locations and locating the user. Input is
/// debounced before it reaches the store. Unmounting (or dropping) cancels a pending search and
/// stops the store, so nothing updates a view that is gone.
#[derive(Debug)]
pub struct LocationSearch {
    debouncer: Debouncer<Event>,
    store_handle: JoinHandle<()>,
    view_rx: WatchReceiver<View>,
}

impl LocationSearch {
    pub fn mount(client: Client, config: &AppConfig, provider: Option<Arc<dyn GeolocationProvider>>) -> Self {
        let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());

        let loader = LocationStore::new(client, config.locations().url(), provider, tx.clone());
        loader.load();
        loader.locate_user();

        let mut store = Store::new(rx, loader);
        let view_rx = store.notifier();
        let store_handle = task::spawn(async move {
            store.listen().await;
        });
        info!("✅  Mounted location search");

        LocationSearch {
            debouncer: Debouncer::new(config.search().debounce(), tx),
            store_handle,
            view_rx,
        }
    }

    /// Takes the full current content of the search box.
    pub fn input(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(text, "⌨️ Input");
        self.debouncer.call(Event::Search(text));
    }

    pub fn view(&self) -> WatchReceiver<View> {
        self.view_rx.clone()
    }

    pub fn unmount(self) {
        if self.debouncer.is_pending() {
            debug!("⏱️ Cancelling pending search");
        }
        info!("👋 Unmounting location search");
    }
}

impl Drop for LocationSearch {
    fn drop(&mut self) {
        self.debouncer.cancel();
        self.store_handle.abort();
    }
}
