mod coordinate;
pub mod events;
mod location;
mod search_state;
mod view;

pub use coordinate::Coordinate;
pub use location::Location;
pub use search_state::SearchState;
pub use view::View;
