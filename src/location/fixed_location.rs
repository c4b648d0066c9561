use crate::domain::Coordinate;
use crate::location::{LocationError, LocationSource};
use async_trait::async_trait;

/// Reports a position that is known up front, e.g. passed on the command line.
/// The position is validated when it is read, like a fix reported by a device.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    latitude: f64,
    longitude: f64,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        FixedLocation { latitude, longitude }
    }
}

#[async_trait]
impl LocationSource for FixedLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Coordinate::new(self.latitude, self.longitude).map_err(|e| LocationError::PositionUnavailable(format!("invalid position: {}", e)))
    }
}
