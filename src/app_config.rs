use crate::domain::Coordinate;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    service: Service,
    office: Office,
}

impl AppConfig {
    /// Loads `<name>.toml` (required), `<name>_local.toml` (optional) and `ABSENSI__*` environment overrides.
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(&format!("{}_local", name)).required(false))
            .add_source(config::Environment::with_prefix("ABSENSI").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn office(&self) -> &Office {
        &self.office
    }
}

#[derive(Debug, Deserialize)]
pub struct Service {
    url: String,
}

impl Service {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Office {
    location: Coordinate,
    radius: f64,
    max_distance: f64,
    #[serde(default = "default_unit")]
    unit: String,
}

fn default_unit() -> String {
    "m".to_string()
}

impl Office {
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Reference radius of the haversine distance, in `unit`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                service: Service { url: "http://attendance.url/absen.php".to_string() },
                office: Office {
                    location: Coordinate { latitude: 0.0, longitude: 0.0 },
                    radius: crate::geofence::EARTH_RADIUS_M,
                    max_distance: 500.0,
                    unit: "m".to_string(),
                },
            },
        }
    }

    pub fn service_url(mut self, url: String) -> Self {
        self.config.service.url = url;
        self
    }

    pub fn office_location(mut self, location: Coordinate) -> Self {
        self.config.office.location = location;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.config.office.radius = radius;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
