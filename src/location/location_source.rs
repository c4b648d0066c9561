use crate::domain::Coordinate;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// One-shot retrieval of the device position.
#[async_trait]
pub trait LocationSource: Debug + Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// A failed fix, carrying the message of the platform that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("{0}")]
    PositionUnavailable(String),
}
