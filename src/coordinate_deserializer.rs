use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        Coordinate::new(inner.latitude, inner.longitude).map_err(|e| Error::custom(format!("invalid location: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_valid_coordinate() -> Result<(), serde_json::Error> {
        let coordinate: Coordinate = serde_json::from_str(r#"{ "latitude": -7.370147, "longitude": 108.9013405 }"#)?;

        assert_eq!(coordinate, Coordinate { latitude: -7.370147, longitude: 108.9013405 });
        Ok(())
    }

    #[test]
    fn deserialize_fails_for_an_invalid_latitude() {
        let result = serde_json::from_str::<Coordinate>(r#"{ "latitude": 123.0, "longitude": 0.0 }"#);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("invalid location: latitude 123 is out of range"));
    }

    #[test]
    fn deserialize_fails_for_an_invalid_longitude() {
        let result = serde_json::from_str::<Coordinate>(r#"{ "latitude": 0.0, "longitude": -200.5 }"#);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("invalid location: longitude -200.5 is out of range"));
    }
}
