mod client;
mod fetch;
mod location_store;
mod locations_response;

pub use client::new_client;
pub use fetch::fetch_locations;
pub use location_store::LocationStore;
