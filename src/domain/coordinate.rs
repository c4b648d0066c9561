use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,  // In degrees
    pub longitude: f64, // In degrees
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }

        Ok(Coordinate { latitude, longitude })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is out of range, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("longitude {0} is out of range, must be between -180 and 180")]
    InvalidLongitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-7.370147, 108.9013405)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    fn new_accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(Coordinate::new(latitude, longitude), Ok(Coordinate { latitude, longitude }));
    }

    #[rstest]
    #[case(90.1, 0.0, CoordinateError::InvalidLatitude(90.1))]
    #[case(-91.0, 0.0, CoordinateError::InvalidLatitude(-91.0))]
    #[case(0.0, 180.5, CoordinateError::InvalidLongitude(180.5))]
    #[case(f64::NAN, 0.0, CoordinateError::InvalidLatitude(f64::NAN))]
    fn new_rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: CoordinateError) {
        let error = Coordinate::new(latitude, longitude).unwrap_err();

        assert_eq!(error.to_string(), expected.to_string());
    }
}
