use crate::domain::Location;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Location>,
}
