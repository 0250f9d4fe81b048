#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Self {
        Coordinate { lat, long }
    }
}
