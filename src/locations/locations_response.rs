use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LocationsResponse<T> {
    pub data: Vec<T>,
}
