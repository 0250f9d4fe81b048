use crate::domain::{Coordinate, Location};

#[derive(Debug)]
pub enum Event {
    LocationsLoaded(Vec<Location>),
    UserLocated(Coordinate),
    Search(String),
}
