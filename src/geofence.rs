use crate::app_config::Office;
use crate::domain::Coordinate;

/// Mean radius of the earth in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

pub const DEFAULT_MAX_DISTANCE_M: f64 = 500.0;

/// Circular boundary around the office. The radius and the maximum distance share one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Geofence {
    office: Coordinate,
    radius: f64,
    max_distance: f64,
}

impl Geofence {
    pub fn new(office: Coordinate, radius: f64, max_distance: f64) -> Self {
        Geofence { office, radius, max_distance }
    }

    /// Haversine distance between two coordinates.
    pub fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let d_lat = (b.latitude - a.latitude).to_radians();
        let d_lon = (b.longitude - a.longitude).to_radians();
        let h = ((d_lat / 2.0).sin().powi(2) + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
            .clamp(0.0, 1.0);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        self.radius * c
    }

    pub fn distance_to_office(&self, position: Coordinate) -> f64 {
        self.distance(position, self.office)
    }

    pub fn within_office(&self, distance: f64) -> bool {
        distance <= self.max_distance
    }
}

impl From<&Office> for Geofence {
    fn from(office: &Office) -> Self {
        Geofence::new(office.location(), office.radius(), office.max_distance())
    }
}

impl Default for Geofence {
    fn default() -> Self {
        Geofence::new(Coordinate::default(), EARTH_RADIUS_M, DEFAULT_MAX_DISTANCE_M)
    }
}
