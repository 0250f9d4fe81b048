use crate::domain::{Coordinate, Location};

/// What the component shows. Rendering requires both the location list and the user's position.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Loading {
        location_count: usize,
    },
    Ready {
        location_count: usize,
        results: Vec<Location>,
        user: Coordinate,
    },
}

impl View {
    pub fn location_count(&self) -> usize {
        match self {
            View::Loading { location_count } => *location_count,
            View::Ready { location_count, .. } => *location_count,
        }
    }
}
