use crate::domain::events::Event;
use crate::domain::{Coordinate, Location, SearchState, View};
use crate::locations::LocationStore;
use crate::search::{filter, sort};
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument};

/// Owns the component state and publishes a fresh [`View`] after every event.
#[derive(Debug)]
pub struct Store {
    locations: Vec<Location>,
    user: Option<Coordinate>,
    search: SearchState,
    loader: LocationStore,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<View>,
    notifier_rx: WatchReceiver<View>,
}

impl Store {
    pub fn new(rx: Receiver<Event>, loader: LocationStore) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(View::Loading { location_count: 0 });

        Store {
            locations: Vec::new(),
            user: None,
            search: SearchState::default(),
            loader,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<View> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::LocationsLoaded(locations) => {
                info!("🔵 Registering {} location(s)", locations.len());
                self.locations = locations;
            }
            Event::UserLocated(coordinate) => {
                info!("🔵 User located at {}, {}", coordinate.lat, coordinate.long);
                self.user = Some(coordinate);
            }
            Event::Search(query) => {
                debug!(query, "🔎 Searching...");
                if query.is_empty() {
                    self.loader.load();
                }
                self.search.query = query;
            }
        }

        self.refresh_results();
        self.notifier_tx.send_replace(self.view());
    }

    #[cfg(test)]
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn view(&self) -> View {
        match self.user {
            Some(user) if !self.locations.is_empty() => View::Ready {
                location_count: self.locations.len(),
                results: self.search.results.clone(),
                user,
            },
            _ => View::Loading {
                location_count: self.locations.len(),
            },
        }
    }

    fn refresh_results(&mut self) {
        let matches = filter(&self.search.query, &self.locations);
        self.search.results = match self.user {
            Some(user) => sort(matches, user),
            None => matches,
        };
        debug!(query = self.search.query, "🔎 {} result(s)", self.search.results.len());
    }
}
