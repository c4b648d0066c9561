mod fixed_location;
mod location_source;

pub use fixed_location::FixedLocation;
pub use location_source::{LocationError, LocationSource};
